//! One module per backend resource.
//!
//! Each call carries the message shown when the backend gives none. Request
//! payloads are validated locally before anything is sent.

pub mod cep;
pub mod churches;
pub mod credentials;
pub mod dashboard;
pub mod documents;
pub mod meetings;
pub mod members;
pub mod ministers;
pub mod permissions;
pub mod users;
