//! Admin user management (`/admin/users`).

use reqwest::Method;

use ecclesia_auth::{PasswordResetRequest, UserInfo, UserRequest, UserStatusRequest, UserUpdateRequest};
use ecclesia_core::UserId;

use crate::error::ClientError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<UserInfo>, ClientError> {
    api.get_json("/admin/users", "Failed to fetch the users.").await
}

/// New accounts start disabled.
pub async fn create(api: &ApiClient, request: &UserRequest) -> Result<Option<UserInfo>, ClientError> {
    request.validate()?;
    api.post_json("/admin/users", request, "Failed to create the user.")
        .await
}

pub async fn update(
    api: &ApiClient,
    id: UserId,
    request: &UserUpdateRequest,
) -> Result<Option<UserInfo>, ClientError> {
    request.validate()?;
    api.put_json(&format!("/admin/users/{id}"), request, "Failed to update the user.")
        .await
}

pub async fn delete(api: &ApiClient, id: UserId) -> Result<(), ClientError> {
    api.delete(&format!("/admin/users/{id}"), "Failed to delete the user.")
        .await
}

/// Activate or deactivate an account.
pub async fn set_enabled(api: &ApiClient, id: UserId, enabled: bool) -> Result<(), ClientError> {
    api.send_json(
        Method::PATCH,
        &format!("/admin/users/{id}/status"),
        &UserStatusRequest { enabled },
        "Failed to update the user status.",
    )
    .await
}

pub async fn reset_password(
    api: &ApiClient,
    id: UserId,
    request: &PasswordResetRequest,
) -> Result<(), ClientError> {
    request.validate()?;
    api.send_json(
        Method::PUT,
        &format!("/admin/users/{id}/password"),
        request,
        "Failed to reset the user password.",
    )
    .await
}
