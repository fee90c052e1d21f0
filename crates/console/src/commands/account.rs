use std::process::ExitCode;

use ecclesia_auth::{Access, AuthRequest, RegisterRequest, Role};
use ecclesia_client::run_mutation;
use ecclesia_client::services::dashboard;

use super::report;
use crate::context::Context;
use crate::table::details;

pub async fn login(ctx: &Context, username: String, password: String) -> anyhow::Result<ExitCode> {
    let user = ctx.session.login(&AuthRequest::new(username, password)).await?;
    println!("Signed in as {} ({}).", user.username, user.role);
    Ok(ExitCode::SUCCESS)
}

pub async fn logout(ctx: &Context) -> anyhow::Result<ExitCode> {
    ctx.session.logout().await;
    println!("Signed out.");
    Ok(ExitCode::SUCCESS)
}

pub async fn whoami(ctx: &Context) -> anyhow::Result<ExitCode> {
    let Some(user) = ctx.guard(Access::Authenticated).await? else {
        anyhow::bail!("no user in session");
    };
    print!(
        "{}",
        details(&[
            ("Username", user.username.clone()),
            ("Email", user.email.clone()),
            ("Role", user.role.to_string()),
            ("Admin", crate::table::yes_no(user.is_admin()).to_string()),
        ])
    );
    Ok(ExitCode::SUCCESS)
}

pub async fn register(
    ctx: &Context,
    username: String,
    email: String,
    password: String,
    role: Role,
) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Public).await?;
    let message = format!("Account \"{username}\" registered.");
    let request = RegisterRequest {
        username,
        email,
        password,
        role,
    };
    Ok(report(&run_mutation(ctx.session.register(&request), message).await))
}

pub async fn dashboard(ctx: &Context) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Authenticated).await?;
    let stats = dashboard::stats(ctx.api()).await?;
    print!(
        "{}",
        details(&[
            ("Members", stats.total_members.to_string()),
            ("Ministers", stats.total_ministers.to_string()),
            ("Churches", stats.total_churches.to_string()),
            ("Leaders", stats.total_leaders.to_string()),
        ])
    );
    Ok(ExitCode::SUCCESS)
}
