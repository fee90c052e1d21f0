use ecclesia_core::UserId;
use serde::{Deserialize, Serialize};

use crate::Role;

/// The signed-in console user, as returned by the "who am I" endpoints.
///
/// The auth service's `/me` omits `id` and `enabled`; both default so either
/// endpoint can populate the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Admins and secretaries may manage ministerial records.
    pub fn can_manage(&self) -> bool {
        self.role.is_admin() || self.role.is_secretary()
    }
}
