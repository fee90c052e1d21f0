//! `ecclesia-client`: typed REST client for the church-administration backend.
//!
//! The [`Session`] owns authentication state (token persistence, revalidation
//! on start-up, bearer header injection). Everything else is a thin wrapper
//! per backend resource in [`services`].

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod mutation;
pub mod services;
pub mod session;
pub mod token_store;

pub use auth::AuthApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use mutation::{MutationOutcome, UNEXPECTED_ERROR, run_mutation};
pub use session::Session;
pub use token_store::{FileTokenStore, MemoryTokenStore, StoreError, StoredTokens, TokenStore};
