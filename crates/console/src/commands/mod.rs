//! Command handlers, one module per resource.

mod account;
mod churches;
mod documents;
mod meetings;
mod members;
mod ministers;
mod roles;
mod users;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;

use ecclesia_client::MutationOutcome;

use crate::cli::{Cli, Command};
use crate::context::Context;

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let ctx = Context::connect(cli.backend.to_config()).await?;
    match cli.command {
        Command::Login { username, password } => account::login(&ctx, username, password).await,
        Command::Logout => account::logout(&ctx).await,
        Command::Whoami => account::whoami(&ctx).await,
        Command::Register {
            username,
            email,
            password,
            role,
        } => account::register(&ctx, username, email, password, role).await,
        Command::Dashboard => account::dashboard(&ctx).await,
        Command::Members(cmd) => members::run(&ctx, cmd).await,
        Command::Churches(cmd) => churches::run(&ctx, cmd).await,
        Command::Ministers(cmd) => ministers::run(&ctx, cmd).await,
        Command::Meetings(cmd) => meetings::run(&ctx, cmd).await,
        Command::Users(cmd) => users::run(&ctx, cmd).await,
        Command::Roles(cmd) => roles::run(&ctx, cmd).await,
        Command::Documents(cmd) => documents::run(&ctx, cmd).await,
    }
}

fn report(outcome: &MutationOutcome) -> ExitCode {
    println!("{outcome}");
    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print a mutation's outcome, then the re-fetched list.
async fn settle<F>(outcome: MutationOutcome, relist: F) -> anyhow::Result<ExitCode>
where
    F: Future<Output = anyhow::Result<ExitCode>>,
{
    let code = report(&outcome);
    println!();
    relist.await?;
    Ok(code)
}

async fn save(dir: &Path, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "file saved");
    Ok(path)
}
