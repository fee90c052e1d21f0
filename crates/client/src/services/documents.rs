use ecclesia_documents::{DocumentRequest, DocumentType};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Render a document; the body is the PDF.
pub async fn generate(api: &ApiClient, request: &DocumentRequest) -> Result<Vec<u8>, ClientError> {
    request.validate()?;
    api.post_for_bytes("/documents/generate", request, "Failed to generate the document.")
        .await
}

/// Editable body text for an office document type.
pub async fn template(api: &ApiClient, document_type: DocumentType) -> Result<String, ClientError> {
    api.get_text(
        &format!("/templates/{}", document_type.as_str()),
        "Failed to load the document template.",
    )
    .await
}
