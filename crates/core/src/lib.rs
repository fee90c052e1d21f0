//! `ecclesia-core`: shared primitives for the church-administration console.
//!
//! This crate contains **pure** building blocks (no HTTP, no storage): typed
//! identifiers, the validation/error model, and small value objects.

pub mod address;
pub mod entity;
pub mod error;
pub mod id;
pub mod search;
pub mod validation;
pub mod value_object;

pub use address::Address;
pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use search::{MIN_SEARCH_LEN, name_matches};
pub use id::{ChurchId, MeetingId, MemberId, MinisterId, PermissionId, RoleId, UserId};
pub use validation::{FieldError, ValidationErrors, Validator};
pub use value_object::{Cpf, ValueObject, ZipCode, digits_only, format_cpf};
