use ecclesia_core::{MIN_SEARCH_LEN, MinisterId};
use ecclesia_ministry::{Minister, MinisterRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Minister>, ClientError> {
    api.get_json("/ministers", "Failed to fetch the list of ministers.")
        .await
}

/// Register a member as a minister.
pub async fn consecrate(
    api: &ApiClient,
    request: &MinisterRequest,
) -> Result<Option<Minister>, ClientError> {
    request.validate()?;
    let minister: Option<Minister> = api
        .post_json("/ministers", request, "Failed to consecrate the new minister.")
        .await?;
    tracing::info!(
        minister_id = minister.as_ref().map(|m| i64::from(m.id)),
        position = request.position.as_ref().map(|p| p.as_str()),
        "minister consecrated"
    );
    Ok(minister)
}

pub async fn update(
    api: &ApiClient,
    id: MinisterId,
    request: &MinisterRequest,
) -> Result<Option<Minister>, ClientError> {
    request.validate()?;
    api.put_json(
        &format!("/ministers/{id}"),
        request,
        "Failed to update the ministerial record.",
    )
    .await
}

pub async fn delete(api: &ApiClient, id: MinisterId) -> Result<(), ClientError> {
    api.delete(
        &format!("/ministers/{id}"),
        "Failed to delete the ministerial record.",
    )
    .await
}

pub async fn search(api: &ApiClient, term: &str) -> Result<Vec<Minister>, ClientError> {
    if term.trim().chars().count() < MIN_SEARCH_LEN {
        return Ok(Vec::new());
    }
    let ministers = list(api).await?;
    Ok(ecclesia_ministry::search(&ministers, term)
        .into_iter()
        .cloned()
        .collect())
}
