use std::path::Path;

use reqwest::multipart::{Form, Part};

use ecclesia_core::{DomainError, MIN_SEARCH_LEN, MemberId};
use ecclesia_members::{Member, MemberRequest};

use crate::error::ClientError;
use crate::http::ApiClient;

const PHOTO_FAILED: &str = "Failed to upload the photo.";

pub async fn list(api: &ApiClient) -> Result<Vec<Member>, ClientError> {
    api.get_json("/members", "Failed to fetch the members.").await
}

pub async fn get(api: &ApiClient, id: MemberId) -> Result<Member, ClientError> {
    api.get_json(&format!("/members/{id}"), "Failed to load the member.")
        .await
}

/// The created record, when the backend echoes it.
pub async fn create(
    api: &ApiClient,
    request: &MemberRequest,
) -> Result<Option<Member>, ClientError> {
    request.validate()?;
    let member: Option<Member> = api
        .post_json("/members", request, "Failed to create the member.")
        .await?;
    match &member {
        Some(member) => tracing::info!(member_id = %member.id, "member created"),
        None => tracing::info!("member created"),
    }
    Ok(member)
}

pub async fn update(
    api: &ApiClient,
    id: MemberId,
    request: &MemberRequest,
) -> Result<Option<Member>, ClientError> {
    request.validate()?;
    api.put_json(&format!("/members/{id}"), request, "Failed to update the member.")
        .await
}

pub async fn delete(api: &ApiClient, id: MemberId) -> Result<(), ClientError> {
    api.delete(&format!("/members/{id}"), "Failed to delete the member.")
        .await
}

/// Client-side name search over the full list.
pub async fn search(api: &ApiClient, term: &str) -> Result<Vec<Member>, ClientError> {
    if term.trim().chars().count() < MIN_SEARCH_LEN {
        return Ok(Vec::new());
    }
    let members = list(api).await?;
    Ok(ecclesia_members::search(&members, term)
        .into_iter()
        .cloned()
        .collect())
}

/// Content type for a photo upload; only PNG and JPEG are accepted.
pub fn photo_mime(file_name: &str) -> Result<&'static str, DomainError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok("image/png"),
        Some("jpg" | "jpeg") => Ok("image/jpeg"),
        _ => Err(DomainError::validation(
            "file",
            "photo must be a PNG or JPEG image",
        )),
    }
}

/// `POST /members/{id}/photo` as multipart field `file`.
pub async fn upload_photo(
    api: &ApiClient,
    id: MemberId,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<(), ClientError> {
    let mime = photo_mime(file_name)?;
    if bytes.is_empty() {
        return Err(DomainError::validation("file", "photo file is empty").into());
    }
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|source| ClientError::Transport {
            message: PHOTO_FAILED.to_string(),
            source,
        })?;
    api.post_multipart(
        &format!("/members/{id}/photo"),
        Form::new().part("file", part),
        PHOTO_FAILED,
    )
    .await?;
    tracing::info!(member_id = %id, file_name, "photo uploaded");
    Ok(())
}
