//! Roles and their permission assignments.

use ecclesia_auth::{PermissionResponse, PermissionSelection, RolePermissionsUpdate, RoleResponse};
use ecclesia_core::{DomainError, RoleId};

use crate::error::ClientError;
use crate::http::ApiClient;

pub async fn list_permissions(api: &ApiClient) -> Result<Vec<PermissionResponse>, ClientError> {
    api.get_json("/permissions", "Failed to fetch the permissions.")
        .await
}

pub async fn list_roles(api: &ApiClient) -> Result<Vec<RoleResponse>, ClientError> {
    api.get_json("/roles", "Failed to fetch the roles.").await
}

/// Roles and the permission catalogue, fetched concurrently.
pub async fn load_matrix(
    api: &ApiClient,
) -> Result<(Vec<RoleResponse>, Vec<PermissionResponse>), ClientError> {
    tokio::try_join!(list_roles(api), list_permissions(api))
}

/// Replace a role's permission set.
///
/// Names missing from `catalogue` are rejected before sending.
pub async fn update_role_permissions(
    api: &ApiClient,
    role_id: RoleId,
    selection: PermissionSelection,
    catalogue: &[PermissionResponse],
) -> Result<Option<RoleResponse>, ClientError> {
    let unknown = selection.unknown(catalogue);
    if !unknown.is_empty() {
        return Err(DomainError::validation(
            "permissionNames",
            format!("unknown permissions: {}", unknown.join(", ")),
        )
        .into());
    }
    let body = RolePermissionsUpdate {
        permission_names: selection.into_names(),
    };
    let role: Option<RoleResponse> = api
        .put_json(
            &format!("/roles/{role_id}/permissions"),
            &body,
            "Failed to update the role permissions.",
        )
        .await?;
    tracing::info!(%role_id, "role permissions updated");
    Ok(role)
}
