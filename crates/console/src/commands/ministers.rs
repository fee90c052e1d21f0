use std::process::ExitCode;

use anyhow::anyhow;

use ecclesia_auth::Access;
use ecclesia_client::run_mutation;
use ecclesia_client::services::{credentials, ministers};
use ecclesia_core::{MIN_SEARCH_LEN, find_by_id};
use ecclesia_documents::{CredentialCard, CredentialKind};
use ecclesia_ministry::{Minister, MinisterRequest};

use super::settle;
use crate::cli::MinistersCommand;
use crate::context::Context;
use crate::payload;
use crate::table::{Table, date, opt};

pub async fn run(ctx: &Context, command: MinistersCommand) -> anyhow::Result<ExitCode> {
    let access = match command {
        MinistersCommand::Consecrate { .. }
        | MinistersCommand::Update { .. }
        | MinistersCommand::Delete { .. } => Access::Manager,
        _ => Access::Authenticated,
    };
    ctx.guard(access).await?;
    let api = ctx.api();
    match command {
        MinistersCommand::List => list(ctx).await,
        MinistersCommand::Search { term } => {
            if term.trim().chars().count() < MIN_SEARCH_LEN {
                println!("Type at least {MIN_SEARCH_LEN} characters to search.");
                return Ok(ExitCode::SUCCESS);
            }
            print!("{}", table(&ministers::search(api, &term).await?));
            Ok(ExitCode::SUCCESS)
        }
        MinistersCommand::Consecrate { file } => {
            let request: MinisterRequest = payload::read(&file)?;
            let outcome =
                run_mutation(ministers::consecrate(api, &request), "Minister consecrated.").await;
            settle(outcome, list(ctx)).await
        }
        MinistersCommand::Update { id, file } => {
            let all = ministers::list(api).await?;
            let current = find_by_id(&all, id).ok_or_else(|| anyhow!("minister {id} not found"))?;
            let request = payload::patched(&MinisterRequest::from(current), payload::read(&file)?)?;
            let outcome = run_mutation(
                ministers::update(api, id, &request),
                "Ministerial record updated.",
            )
            .await;
            settle(outcome, list(ctx)).await
        }
        MinistersCommand::Delete { id } => {
            let outcome =
                run_mutation(ministers::delete(api, id), "Ministerial record deleted.").await;
            settle(outcome, list(ctx)).await
        }
        MinistersCommand::Credential { id } => {
            let data = credentials::fetch(api, CredentialKind::Minister, id.get()).await?;
            println!("{}", CredentialCard::new(&data, &ctx.config.origin()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    print!("{}", table(&ministers::list(ctx.api()).await?));
    Ok(ExitCode::SUCCESS)
}

fn table(ministers: &[Minister]) -> Table {
    let mut table = Table::new(["ID", "Name", "Position", "Consecrated", "Church"]);
    for m in ministers {
        table.row([
            m.id.to_string(),
            m.full_name.clone(),
            m.position.label().to_string(),
            date(m.consecration_date),
            opt(m.church_name.as_deref()),
        ]);
    }
    table
}
