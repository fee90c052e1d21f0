use std::future::Future;

use serde::Serialize;

use crate::error::ClientError;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Result of a create/update/delete as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
}

impl MutationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mark = if self.success { "ok" } else { "error" };
        write!(f, "[{mark}] {}", self.message)
    }
}

/// Await `mutation` and fold its result into a [`MutationOutcome`].
pub async fn run_mutation<T, F>(mutation: F, success_message: impl Into<String>) -> MutationOutcome
where
    F: Future<Output = Result<T, ClientError>>,
{
    match mutation.await {
        Ok(_) => MutationOutcome::ok(success_message),
        Err(err) => {
            let message = err.to_string();
            tracing::warn!(error = %message, "mutation failed");
            if message.trim().is_empty() {
                MutationOutcome::failed(UNEXPECTED_ERROR)
            } else {
                MutationOutcome::failed(message)
            }
        }
    }
}
