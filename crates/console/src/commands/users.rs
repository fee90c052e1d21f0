use std::process::ExitCode;

use anyhow::anyhow;

use ecclesia_auth::{Access, PasswordResetRequest, UserInfo, UserRequest, UserUpdateRequest};
use ecclesia_client::run_mutation;
use ecclesia_client::services::users;
use ecclesia_core::UserId;

use super::settle;
use crate::cli::UsersCommand;
use crate::context::Context;
use crate::payload;
use crate::table::{Table, opt, yes_no};

pub async fn run(ctx: &Context, command: UsersCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Admin).await?;
    let api = ctx.api();
    match command {
        UsersCommand::List => list(ctx).await,
        UsersCommand::Create { file } => {
            let request: UserRequest = payload::read(&file)?;
            let message = format!("User \"{}\" created.", request.username);
            let outcome = run_mutation(users::create(api, &request), message).await;
            settle(outcome, list(ctx)).await
        }
        UsersCommand::Update { id, file } => {
            let current = find(ctx, id).await?;
            let request =
                payload::patched(&UserUpdateRequest::from(&current), payload::read(&file)?)?;
            let message = format!("User \"{}\" updated.", request.username);
            let outcome = run_mutation(users::update(api, id, &request), message).await;
            settle(outcome, list(ctx)).await
        }
        UsersCommand::Delete { id } => {
            let outcome = run_mutation(users::delete(api, id), "User deleted.").await;
            settle(outcome, list(ctx)).await
        }
        UsersCommand::Activate { id } => set_enabled(ctx, id, true).await,
        UsersCommand::Deactivate { id } => set_enabled(ctx, id, false).await,
        UsersCommand::ResetPassword { id, password } => {
            let request = PasswordResetRequest {
                new_password: password,
            };
            let outcome =
                run_mutation(users::reset_password(api, id, &request), "Password reset.").await;
            settle(outcome, list(ctx)).await
        }
    }
}

async fn find(ctx: &Context, id: UserId) -> anyhow::Result<UserInfo> {
    users::list(ctx.api())
        .await?
        .into_iter()
        .find(|u| u.id == id)
        .ok_or_else(|| anyhow!("user {id} not found"))
}

async fn set_enabled(ctx: &Context, id: UserId, enabled: bool) -> anyhow::Result<ExitCode> {
    let message = if enabled {
        "User activated."
    } else {
        "User deactivated."
    };
    let outcome = run_mutation(users::set_enabled(ctx.api(), id, enabled), message).await;
    settle(outcome, list(ctx)).await
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    print!("{}", table(&users::list(ctx.api()).await?));
    Ok(ExitCode::SUCCESS)
}

fn table(users: &[UserInfo]) -> Table {
    let mut table = Table::new(["ID", "Username", "Email", "Role", "Enabled"]);
    for u in users {
        table.row([
            u.id.to_string(),
            u.username.clone(),
            opt(Some(&u.email)),
            u.role.to_string(),
            yes_no(u.enabled).to_string(),
        ]);
    }
    table
}
