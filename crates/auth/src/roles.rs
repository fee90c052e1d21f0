use std::borrow::Cow;

use ecclesia_core::RoleId;
use serde::{Deserialize, Serialize};

use crate::permissions::PermissionResponse;

/// Role identifier used for RBAC.
///
/// Roles stay opaque strings on the wire. The backend reports them with a
/// `ROLE_` prefix on user records but accepts bare names on registration, so
/// the predicates below accept both spellings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("ROLE_ADMIN"));
    pub const SECRETARY: Role = Role(Cow::Borrowed("ROLE_SECRETARY"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name without the `ROLE_` prefix, upper-cased.
    pub fn bare(&self) -> String {
        let upper = self.0.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_") {
            Some(rest) => rest.to_string(),
            None => upper,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.bare() == "ADMIN"
    }

    pub fn is_secretary(&self) -> bool {
        self.bare() == "SECRETARY"
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Role {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().to_string()))
    }
}

/// Role as listed by `GET /roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<PermissionResponse>,
}

impl RoleResponse {
    pub fn permission_names(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.name.clone()).collect()
    }
}

/// Body of `PUT /roles/{id}/permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionsUpdate {
    pub permission_names: Vec<String>,
}
