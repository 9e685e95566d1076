mod companies;
mod compare;
mod export;

use finboard_core::{CompanyFeed, HttpCompanyFeed, SelectionBoard};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let feed = HttpCompanyFeed::new(cli.endpoint.clone())?;

    match &cli.command {
        Command::Companies => companies::run(&feed, cli.format, cli.pretty).await,
        Command::Compare(args) => compare::run(args, &feed, cli.format, cli.pretty).await,
        Command::Export(args) => export::run(args, &feed).await,
    }
}

/// Fetch the company list and build the selection board over it.
async fn load_board(feed: &dyn CompanyFeed) -> Result<SelectionBoard, CliError> {
    let companies = feed.fetch_all().await?;
    tracing::info!(count = companies.len(), "company list loaded");
    Ok(SelectionBoard::new(companies)?)
}
