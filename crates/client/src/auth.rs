//! Calls to the authentication service.
//!
//! These requests never carry the session's default bearer header.

use ecclesia_auth::{AuthRequest, AuthTokens, RegisterRequest, UserInfo};

use crate::error::ClientError;
use crate::http::{decode, join, send};

const LOGIN_FAILED: &str = "Login failed. Check your credentials.";
const REGISTER_FAILED: &str = "User registration failed. Check the submitted data.";
const ME_FAILED: &str = "Failed to load the user information.";

#[derive(Debug, Clone)]
pub struct AuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /login`.
    pub async fn login(&self, credentials: &AuthRequest) -> Result<AuthTokens, ClientError> {
        let req = self
            .http
            .post(join(&self.base_url, "/login"))
            .json(credentials);
        decode(send(req, LOGIN_FAILED).await?, LOGIN_FAILED).await
    }

    /// `POST /register`; the role is sent in its bare spelling.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        request.validate()?;
        let body = request.clone().normalized();
        let req = self.http.post(join(&self.base_url, "/register")).json(&body);
        send(req, REGISTER_FAILED).await?;
        tracing::info!(username = %body.username, "user registered");
        Ok(())
    }

    /// `GET /me` with an explicit token.
    pub async fn me(&self, token: &str) -> Result<UserInfo, ClientError> {
        let req = self
            .http
            .get(join(&self.base_url, "/me"))
            .bearer_auth(token);
        decode(send(req, ME_FAILED).await?, ME_FAILED).await
    }
}
