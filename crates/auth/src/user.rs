//! Account-management payloads (admin user screen and self-registration).

use ecclesia_core::{DomainResult, Validator};
use serde::{Deserialize, Serialize};

use crate::{Role, UserInfo};

/// Minimum password length accepted by the user form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /admin/users`.
///
/// New accounts start disabled and must be activated separately.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .required("username", &self.username, "username is required")
            .required("email", &self.email, "email is required")
            .required("password", &self.password, "password is required")
            .min_len(
                "password",
                &self.password,
                MIN_PASSWORD_LEN,
                "password must have at least 6 characters",
            )
            .required("role", self.role.as_str(), "role is required")
            .finish()
    }
}

impl core::fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /admin/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl UserUpdateRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .required("username", &self.username, "username is required")
            .required("email", &self.email, "email is required")
            .required("role", self.role.as_str(), "role is required")
            .finish()
    }
}

impl From<&UserInfo> for UserUpdateRequest {
    fn from(user: &UserInfo) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Body of `POST {auth}/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Bare role name: `ADMIN` or `SECRETARY`.
    pub role: Role,
}

impl RegisterRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .required("username", &self.username, "username is required")
            .required("email", &self.email, "email is required")
            .required("password", &self.password, "password is required")
            .check(
                self.role.is_admin() || self.role.is_secretary(),
                "role",
                "role must be ADMIN or SECRETARY",
            )
            .finish()
    }

    /// Registration expects the bare role spelling.
    pub fn normalized(mut self) -> Self {
        self.role = Role::new(self.role.bare());
        self
    }
}

impl core::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Body of `PATCH /admin/users/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatusRequest {
    pub enabled: bool,
}

/// Body of `PUT /admin/users/{id}/password`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub new_password: String,
}

impl PasswordResetRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .required("newPassword", &self.new_password, "new password is required")
            .finish()
    }
}

impl core::fmt::Debug for PasswordResetRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordResetRequest { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_request(password: &str) -> UserRequest {
        UserRequest {
            username: "ana".into(),
            email: "ana@example.org".into(),
            password: password.into(),
            role: Role::SECRETARY,
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let err = user_request("12345").validate().unwrap_err();
        assert!(err.field_errors().unwrap().has("password"));
        assert!(user_request("123456").validate().is_ok());
    }

    #[test]
    fn register_requires_known_role() {
        let req = RegisterRequest {
            username: "ana".into(),
            email: "ana@example.org".into(),
            password: "secret".into(),
            role: Role::new("PASTOR"),
        };
        assert!(req.validate().unwrap_err().field_errors().unwrap().has("role"));
    }

    #[test]
    fn register_role_is_sent_bare() {
        let req = RegisterRequest {
            username: "ana".into(),
            email: "ana@example.org".into(),
            password: "secret".into(),
            role: Role::ADMIN,
        }
        .normalized();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "ADMIN");
    }

    #[test]
    fn password_reset_body_is_camel_case() {
        let json = serde_json::to_value(PasswordResetRequest {
            new_password: "abcdef".into(),
        })
        .unwrap();
        assert_eq!(json["newPassword"], "abcdef");
    }
}
