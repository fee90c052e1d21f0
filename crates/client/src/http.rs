//! Shared HTTP plumbing.
//!
//! [`ApiClient`] holds the default `Authorization` header for the main API.
//! The header lives behind a lock and is read on every request, so a session
//! can attach or drop it while other handles to the client are in use.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::{ClientError, error_message};

/// Build the `reqwest` client every service shares.
pub fn build_http(config: &ClientConfig) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|source| ClientError::Transport {
            message: "Failed to initialize the HTTP client.".to_string(),
            source,
        })
}

pub(crate) fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Send and fail on non-success statuses.
pub(crate) async fn send(req: RequestBuilder, failure: &str) -> Result<Response, ClientError> {
    let resp = req.send().await.map_err(|source| {
        tracing::warn!(error = %source, "request failed before a response");
        ClientError::Transport {
            message: failure.to_string(),
            source,
        }
    })?;
    check(resp, failure).await
}

pub(crate) async fn check(resp: Response, failure: &str) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().path().to_string();
    let body = resp.bytes().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| failure.to_string());
    tracing::warn!(status = status.as_u16(), path = %url, %message, "backend rejected request");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(
    resp: Response,
    failure: &str,
) -> Result<T, ClientError> {
    resp.json::<T>().await.map_err(|source| ClientError::Decode {
        message: failure.to_string(),
        source: source.into(),
    })
}

/// Decode a write response. Backends may answer 201/204 with no body, which
/// yields `None` rather than a decode failure.
pub(crate) async fn decode_optional<T: DeserializeOwned>(
    resp: Response,
    failure: &str,
) -> Result<Option<T>, ClientError> {
    let body = read_bytes(resp, failure).await?;
    if body.trim_ascii().is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|source| ClientError::Decode {
            message: failure.to_string(),
            source: source.into(),
        })
}

/// Client for the main API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_http(build_http(config)?, &config.api_url))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: Arc::new(RwLock::new(None)),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    /// Attach (`Some`) or drop (`None`) the default bearer token.
    pub async fn set_bearer(&self, token: Option<String>) {
        *self.bearer.write().await = token;
    }

    pub async fn has_bearer(&self) -> bool {
        self.bearer.read().await.is_some()
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match self.bearer.read().await.as_deref() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        failure: &str,
    ) -> Result<T, ClientError> {
        let resp = send(self.request(Method::GET, path).await, failure).await?;
        decode(resp, failure).await
    }

    pub async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        failure: &str,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::GET, path).await.query(query);
        decode(send(req, failure).await?, failure).await
    }

    /// POST a JSON body. The echoed record is `None` when the body is empty.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        failure: &str,
    ) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).await.json(body);
        decode_optional(send(req, failure).await?, failure).await
    }

    pub async fn put_json<B, T>(
        &self,
        path: &str,
        body: &B,
        failure: &str,
    ) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PUT, path).await.json(body);
        decode_optional(send(req, failure).await?, failure).await
    }

    /// Send a JSON body and ignore whatever comes back.
    pub async fn send_json<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        failure: &str,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let req = self.request(method, path).await.json(body);
        send(req, failure).await.map(drop)
    }

    pub async fn delete(&self, path: &str, failure: &str) -> Result<(), ClientError> {
        send(self.request(Method::DELETE, path).await, failure)
            .await
            .map(drop)
    }

    pub async fn get_text(&self, path: &str, failure: &str) -> Result<String, ClientError> {
        let req = self
            .request(Method::GET, path)
            .await
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .header(reqwest::header::PRAGMA, "no-cache");
        let resp = send(req, failure).await?;
        resp.text().await.map_err(|source| ClientError::Decode {
            message: failure.to_string(),
            source: source.into(),
        })
    }

    pub async fn get_bytes(&self, path: &str, failure: &str) -> Result<Vec<u8>, ClientError> {
        let resp = send(self.request(Method::GET, path).await, failure).await?;
        read_bytes(resp, failure).await
    }

    /// POST a JSON body and read a binary (PDF) response.
    pub async fn post_for_bytes<B>(
        &self,
        path: &str,
        body: &B,
        failure: &str,
    ) -> Result<Vec<u8>, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, path).await.json(body);
        read_bytes(send(req, failure).await?, failure).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: multipart::Form,
        failure: &str,
    ) -> Result<(), ClientError> {
        let req = self.request(Method::POST, path).await.multipart(form);
        send(req, failure).await.map(drop)
    }
}

async fn read_bytes(resp: Response, failure: &str) -> Result<Vec<u8>, ClientError> {
    resp.bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|source| ClientError::Decode {
            message: failure.to_string(),
            source: source.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join("http://h/api/", "/members"), "http://h/api/members");
        assert_eq!(join("http://h/api", "members/1"), "http://h/api/members/1");
    }

    #[tokio::test]
    async fn bearer_can_be_attached_and_dropped() {
        let api = ApiClient::with_http(reqwest::Client::new(), "http://localhost:8080/api/");
        assert_eq!(api.base_url(), "http://localhost:8080/api");
        assert!(!api.has_bearer().await);
        api.set_bearer(Some("t".into())).await;
        assert!(api.has_bearer().await);
        api.set_bearer(None).await;
        assert!(!api.has_bearer().await);
    }
}
