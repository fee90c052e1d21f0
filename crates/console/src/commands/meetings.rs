use std::process::ExitCode;

use anyhow::anyhow;

use ecclesia_auth::Access;
use ecclesia_client::run_mutation;
use ecclesia_client::services::meetings;
use ecclesia_core::find_by_id;
use ecclesia_ministry::{Meeting, MeetingRequest};

use super::{save, settle};
use crate::cli::MeetingsCommand;
use crate::context::Context;
use crate::payload;
use crate::table::{Table, date};

pub async fn run(ctx: &Context, command: MeetingsCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Authenticated).await?;
    let api = ctx.api();
    match command {
        MeetingsCommand::List => list(ctx).await,
        MeetingsCommand::Create { file } => {
            let request: MeetingRequest = payload::read(&file)?;
            let outcome = run_mutation(meetings::create(api, request), "Meeting created.").await;
            settle(outcome, list(ctx)).await
        }
        MeetingsCommand::Update { id, file } => {
            let all = meetings::list(api).await?;
            let current = find_by_id(&all, id).ok_or_else(|| anyhow!("meeting {id} not found"))?;
            let request = payload::patched(&MeetingRequest::from(current), payload::read(&file)?)?;
            let outcome =
                run_mutation(meetings::update(api, id, request), "Meeting updated.").await;
            settle(outcome, list(ctx)).await
        }
        MeetingsCommand::Delete { id } => {
            let outcome = run_mutation(meetings::delete(api, id), "Meeting deleted.").await;
            settle(outcome, list(ctx)).await
        }
        MeetingsCommand::Download { id, output } => {
            let pdf = meetings::download_report(api, id).await?;
            let path = save(&output, &Meeting::report_file_name(id), &pdf).await?;
            println!("Saved {}.", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    print!("{}", table(&meetings::list(ctx.api()).await?));
    Ok(ExitCode::SUCCESS)
}

fn table(meetings: &[Meeting]) -> Table {
    let mut table = Table::new(["ID", "Date", "Summary", "Participants"]);
    for m in meetings {
        table.row([
            m.id.to_string(),
            date(Some(m.date)),
            m.summary.clone(),
            m.participant_ids().len().to_string(),
        ]);
    }
    table
}
