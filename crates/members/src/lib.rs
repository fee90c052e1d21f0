//! Members domain module (congregant records).
//!
//! Plain records exchanged with the backend plus the local rules the console
//! applies before sending them (no IO, no HTTP).

pub mod member;

pub use ecclesia_core::Address;
pub use member::{Member, MemberRequest, search};
