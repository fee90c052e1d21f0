//! Postal code (CEP) lookups against an external service.

use ecclesia_churches::AddressSuggestion;
use ecclesia_core::ZipCode;

use crate::error::ClientError;
use crate::http::{decode, join, send};

const LOOKUP_FAILED: &str = "Failed to look up the postal code.";

#[derive(Debug, Clone)]
pub struct CepLookup {
    http: reqwest::Client,
    base_url: String,
}

impl CepLookup {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `None` when the code is incomplete or unknown to the service.
    pub async fn lookup(&self, zip: &ZipCode) -> Result<Option<AddressSuggestion>, ClientError> {
        if !zip.is_lookup_ready() {
            return Ok(None);
        }
        let url = join(&self.base_url, &format!("{}/json/", zip.digits()));
        let suggestion: AddressSuggestion =
            decode(send(self.http.get(url), LOOKUP_FAILED).await?, LOOKUP_FAILED).await?;
        if suggestion.is_miss() {
            tracing::debug!(cep = zip.digits(), "postal code not found");
            return Ok(None);
        }
        Ok(Some(suggestion))
    }
}
