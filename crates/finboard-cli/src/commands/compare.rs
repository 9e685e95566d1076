use finboard_core::{revenue_chart, CompanyFeed, ComparisonReport, Symbol};

use crate::cli::{CompareArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &CompareArgs,
    feed: &dyn CompanyFeed,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let mut board = super::load_board(feed).await?;

    // Selection order fixes column order; re-selecting is a no-op, so
    // duplicate symbols on the command line are harmless.
    for raw in &args.symbols {
        let symbol = Symbol::parse(raw)?;
        let id = board
            .find_by_symbol(&symbol)
            .map(|record| record.id.clone())
            .ok_or_else(|| CliError::Command(format!("unknown symbol '{symbol}'")))?;
        board.select(&id)?;
    }

    let selected = board.selected();
    if args.chart {
        let chart = revenue_chart(&selected);
        output::render_chart(&chart, format, pretty)
    } else {
        let report = ComparisonReport::build(&selected);
        output::render_comparison(&report, format, pretty)
    }
}
