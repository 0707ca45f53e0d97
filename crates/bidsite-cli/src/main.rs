//! bidsite CLI
//!
//! Builds and inspects the content index for the bid-agency site.

use std::process::ExitCode;

use anyhow::{Context, Result};
use bidsite_cli::{BidsiteApp, CliArgs};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    let app = BidsiteApp::from_args("bidsite", &args).context("failed to load configuration")?;
    let outcome = app.run(args).await.context("bidsite command failed")?;

    Ok(outcome.into())
}
