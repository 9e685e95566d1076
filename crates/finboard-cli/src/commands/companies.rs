use finboard_core::CompanyFeed;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

pub async fn run(
    feed: &dyn CompanyFeed,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let board = super::load_board(feed).await?;
    output::render_companies(board.companies(), format, pretty)
}
