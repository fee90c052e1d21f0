use std::process::ExitCode;

use anyhow::Context as _;

use ecclesia_auth::Access;
use ecclesia_client::run_mutation;
use ecclesia_client::services::{credentials, members};
use ecclesia_core::MIN_SEARCH_LEN;
use ecclesia_documents::{CredentialCard, CredentialKind, resolve_photo_url};
use ecclesia_members::{Member, MemberRequest};

use super::settle;
use crate::cli::MembersCommand;
use crate::context::Context;
use crate::payload;
use crate::table::{Table, date, details, opt, yes_no};

pub async fn run(ctx: &Context, command: MembersCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Authenticated).await?;
    let api = ctx.api();
    match command {
        MembersCommand::List => list(ctx).await,
        MembersCommand::Show { id } => {
            let member = members::get(api, id).await?;
            print!("{}", describe(&member, &ctx.config.origin()));
            Ok(ExitCode::SUCCESS)
        }
        MembersCommand::Search { term } => {
            if term.trim().chars().count() < MIN_SEARCH_LEN {
                println!("Type at least {MIN_SEARCH_LEN} characters to search.");
                return Ok(ExitCode::SUCCESS);
            }
            print!("{}", table(&members::search(api, &term).await?));
            Ok(ExitCode::SUCCESS)
        }
        MembersCommand::Create { file } => {
            let request: MemberRequest = payload::read(&file)?;
            let outcome = run_mutation(members::create(api, &request), "Member created.").await;
            settle(outcome, list(ctx)).await
        }
        MembersCommand::Update { id, file } => {
            let current = members::get(api, id).await?;
            let request = payload::patched(&MemberRequest::from(&current), payload::read(&file)?)?;
            let outcome =
                run_mutation(members::update(api, id, &request), "Member updated.").await;
            settle(outcome, list(ctx)).await
        }
        MembersCommand::Delete { id } => {
            let outcome = run_mutation(members::delete(api, id), "Member deleted.").await;
            settle(outcome, list(ctx)).await
        }
        MembersCommand::UploadPhoto { id, path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let outcome = run_mutation(
                members::upload_photo(api, id, &file_name, bytes),
                "Photo uploaded.",
            )
            .await;
            settle(outcome, list(ctx)).await
        }
        MembersCommand::Credential { id } => {
            let data = credentials::fetch(api, CredentialKind::Member, id.get()).await?;
            println!("{}", CredentialCard::new(&data, &ctx.config.origin()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    print!("{}", table(&members::list(ctx.api()).await?));
    Ok(ExitCode::SUCCESS)
}

fn table(members: &[Member]) -> Table {
    let mut table = Table::new(["ID", "Name", "CPF", "Telephone", "Church", "Active"]);
    for m in members {
        table.row([
            m.id.to_string(),
            m.full_name.clone(),
            m.cpf().masked(),
            opt(Some(&m.telephone)),
            opt(m.church_name.as_deref()),
            yes_no(m.active).to_string(),
        ]);
    }
    table
}

fn describe(m: &Member, origin: &str) -> String {
    details(&[
        ("ID", m.id.to_string()),
        ("Name", m.full_name.clone()),
        ("CPF", m.cpf().masked()),
        ("RG", opt(Some(&m.rg))),
        ("Telephone", opt(Some(&m.telephone))),
        ("Email", opt(Some(&m.email))),
        ("Born", date(m.date_of_birth)),
        ("Baptized", date(m.baptism_date)),
        ("Joined", date(m.entry_date)),
        ("Active", yes_no(m.active).to_string()),
        ("Address", m.address.summary()),
        ("Church", opt(m.church_name.as_deref())),
        (
            "Photo",
            opt(resolve_photo_url(origin, m.photo_url.as_deref()).as_deref()),
        ),
    ])
}
