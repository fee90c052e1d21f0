use ecclesia_documents::{CredentialData, CredentialKind};

use crate::error::ClientError;
use crate::http::ApiClient;

/// `GET /credentials?type=membro|ministro&id=N`.
pub async fn fetch(
    api: &ApiClient,
    kind: CredentialKind,
    id: i64,
) -> Result<CredentialData, ClientError> {
    api.get_json_with_query(
        "/credentials",
        &[("type", kind.as_str().to_string()), ("id", id.to_string())],
        kind.failure_message(),
    )
    .await
}
