//! `ecclesia` CLI
//!
//! Command-line console for the church-administration backend.

mod cli;
mod commands;
mod context;
mod payload;
mod table;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ecclesia_observability::init(cli.log_format);

    tracing::debug!(
        api_url = %cli.backend.api_url,
        auth_url = %cli.backend.auth_url,
        "parsed command line arguments"
    );

    match commands::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
