use ecclesia_churches::{Church, ChurchRequest};
use ecclesia_core::ChurchId;

use crate::error::ClientError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Church>, ClientError> {
    api.get_json("/churches", "Failed to fetch the churches.").await
}

pub async fn get(api: &ApiClient, id: ChurchId) -> Result<Church, ClientError> {
    api.get_json(&format!("/churches/{id}"), "Failed to load the church.")
        .await
}

pub async fn create(api: &ApiClient, request: &ChurchRequest) -> Result<Option<Church>, ClientError> {
    request.validate()?;
    api.post_json("/churches", request, "Failed to create the church.")
        .await
}

pub async fn update(
    api: &ApiClient,
    id: ChurchId,
    request: &ChurchRequest,
) -> Result<Option<Church>, ClientError> {
    request.validate()?;
    api.put_json(&format!("/churches/{id}"), request, "Failed to update the church.")
        .await
}

pub async fn delete(api: &ApiClient, id: ChurchId) -> Result<(), ClientError> {
    api.delete(&format!("/churches/{id}"), "Failed to delete the church.")
        .await
}
