//! Generated documents and printable credentials.

pub mod credential;
pub mod document;

pub use credential::{CredentialCard, CredentialData, CredentialKind, resolve_photo_url};
pub use document::{DocumentRequest, DocumentType, letter_file_name, office_file_name};
