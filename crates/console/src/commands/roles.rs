use std::process::ExitCode;

use anyhow::anyhow;

use ecclesia_auth::{Access, PermissionResponse, PermissionSelection, RoleResponse};
use ecclesia_client::run_mutation;
use ecclesia_client::services::permissions;

use super::settle;
use crate::cli::RolesCommand;
use crate::context::Context;
use crate::table::Table;

pub async fn run(ctx: &Context, command: RolesCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Admin).await?;
    match command {
        RolesCommand::List => list(ctx).await,
        RolesCommand::Edit { id, grant, revoke } => {
            let (roles, catalogue) = permissions::load_matrix(ctx.api()).await?;
            let role = roles
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow!("role {id} not found"))?;
            let selection = edited(role, &grant, &revoke);
            let outcome = run_mutation(
                permissions::update_role_permissions(ctx.api(), id, selection, &catalogue),
                format!("Permissions of {} updated.", role.name),
            )
            .await;
            settle(outcome, list(ctx)).await
        }
    }
}

/// Current permissions of `role` with grants applied before revocations.
fn edited(role: &RoleResponse, grant: &[String], revoke: &[String]) -> PermissionSelection {
    let mut selection = PermissionSelection::new(role.permission_names());
    for name in grant {
        selection.grant(name.trim());
    }
    for name in revoke {
        selection.revoke(name.trim());
    }
    selection
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    let (roles, catalogue) = permissions::load_matrix(ctx.api()).await?;
    print!("{}", table(&roles, &catalogue));
    Ok(ExitCode::SUCCESS)
}

/// One row per role, one column per permission in the catalogue.
fn table(roles: &[RoleResponse], catalogue: &[PermissionResponse]) -> Table {
    let mut table = Table::new(
        std::iter::once("Role".to_string()).chain(catalogue.iter().map(|p| p.name.clone())),
    );
    for role in roles {
        let names = role.permission_names();
        table.row(std::iter::once(format!("{} ({})", role.name, role.id)).chain(
            catalogue
                .iter()
                .map(|p| String::from(if names.contains(&p.name) { "x" } else { "" })),
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Vec<RoleResponse>, Vec<PermissionResponse>) {
        let catalogue: Vec<PermissionResponse> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "MEMBER_READ"},
            {"id": 2, "name": "MEMBER_WRITE"}
        ]))
        .unwrap();
        let roles: Vec<RoleResponse> = serde_json::from_value(serde_json::json!([
            {"id": 2, "name": "ROLE_SECRETARY", "permissions": [{"id": 1, "name": "MEMBER_READ"}]}
        ]))
        .unwrap();
        (roles, catalogue)
    }

    #[test]
    fn matrix_marks_granted_permissions() {
        let (roles, catalogue) = fixtures();
        let text = table(&roles, &catalogue).to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Role                MEMBER_READ  MEMBER_WRITE"));
        assert_eq!(lines.nth(1), Some("ROLE_SECRETARY (2)  x"));
    }

    #[test]
    fn edit_grants_then_revokes() {
        let (roles, _) = fixtures();
        let selection = edited(
            &roles[0],
            &["MEMBER_WRITE".into(), "MEMBER_READ".into()],
            &[" MEMBER_READ ".into()],
        );
        assert_eq!(selection.names(), ["MEMBER_WRITE".to_string()]);
    }
}
