//! `ecclesia-auth`: pure authentication and authorization rules.
//!
//! No HTTP and no storage: it models who
//! is signed in, what they may do, and how a screen or command should react.

pub mod authorize;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod tokens;
pub mod user;

pub use authorize::{Access, AuthzError, GuardDecision, SessionState, decide, require};
pub use permissions::{Permission, PermissionResponse, PermissionSelection};
pub use principal::UserInfo;
pub use roles::{Role, RolePermissionsUpdate, RoleResponse};
pub use tokens::{AuthRequest, AuthTokens};
pub use user::{PasswordResetRequest, RegisterRequest, UserRequest, UserStatusRequest, UserUpdateRequest};
