use ecclesia_core::MeetingId;
use ecclesia_ministry::{Meeting, MeetingRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<Vec<Meeting>, ClientError> {
    api.get_json("/meetings", "Failed to fetch the meetings.").await
}

pub async fn create(api: &ApiClient, request: MeetingRequest) -> Result<Option<Meeting>, ClientError> {
    request.validate()?;
    api.post_json("/meetings", &request.normalized(), "Failed to create the meeting.")
        .await
}

pub async fn update(
    api: &ApiClient,
    id: MeetingId,
    request: MeetingRequest,
) -> Result<Option<Meeting>, ClientError> {
    request.validate()?;
    api.put_json(
        &format!("/meetings/{id}"),
        &request.normalized(),
        "Failed to update the meeting.",
    )
    .await
}

pub async fn delete(api: &ApiClient, id: MeetingId) -> Result<(), ClientError> {
    api.delete(&format!("/meetings/{id}"), "Failed to delete the meeting.")
        .await
}

/// PDF report for one meeting.
pub async fn download_report(api: &ApiClient, id: MeetingId) -> Result<Vec<u8>, ClientError> {
    api.get_bytes(
        &format!("/meetings/{id}/download"),
        "Failed to download the meeting report.",
    )
    .await
}
