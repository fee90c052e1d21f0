//! Authentication state for one console user.
//!
//! The session starts in `Loading`. [`Session::bootstrap`] revalidates a
//! stored token against `GET /users/me`; [`Session::login`] exchanges
//! credentials for tokens; [`Session::logout`] clears the state, the token
//! store and the default bearer header together.

use std::sync::Arc;

use tokio::sync::RwLock;

use ecclesia_auth::{Access, AuthRequest, RegisterRequest, SessionState, UserInfo, require};

use crate::auth::AuthApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{ApiClient, build_http};
use crate::token_store::{StoredTokens, TokenStore};

const ME_FAILED: &str = "Failed to load the user information.";

pub struct Session {
    api: ApiClient,
    auth: AuthApi,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(api: ApiClient, auth: AuthApi, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            auth,
            store,
            state: RwLock::new(SessionState::Loading),
        }
    }

    /// Build both clients over one connection pool.
    pub fn connect(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        let http = build_http(config)?;
        let api = ApiClient::with_http(http.clone(), &config.api_url);
        let auth = AuthApi::new(http, &config.auth_url);
        Ok(Self::new(api, auth, store))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<UserInfo> {
        self.state.read().await.user().cloned()
    }

    /// Restore a previous session from the token store.
    ///
    /// Never fails: a missing, unreadable or rejected token ends anonymous.
    pub async fn bootstrap(&self) -> SessionState {
        *self.state.write().await = SessionState::Loading;

        let token = match self.store.load() {
            Ok(tokens) => tokens.access_token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored tokens");
                self.logout().await;
                return SessionState::Anonymous;
            }
        };

        let Some(token) = token else {
            tracing::debug!("no stored token");
            *self.state.write().await = SessionState::Anonymous;
            return SessionState::Anonymous;
        };

        self.api.set_bearer(Some(token)).await;
        match self.fetch_me().await {
            Ok(user) => {
                tracing::info!(username = %user.username, "session restored");
                let state = SessionState::Authenticated(user);
                *self.state.write().await = state.clone();
                state
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored token rejected, signing out");
                self.logout().await;
                SessionState::Anonymous
            }
        }
    }

    /// Exchange credentials for tokens and load the user.
    ///
    /// Any failure leaves the session anonymous with an empty token store.
    pub async fn login(&self, credentials: &AuthRequest) -> Result<UserInfo, ClientError> {
        match self.try_login(credentials).await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "signed in");
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(username = %credentials.username, error = %err, "login failed");
                self.logout().await;
                Err(err)
            }
        }
    }

    async fn try_login(&self, credentials: &AuthRequest) -> Result<UserInfo, ClientError> {
        let tokens = self.auth.login(credentials).await?;
        self.store.save(&StoredTokens::from(&tokens))?;
        self.api.set_bearer(Some(tokens.access_token)).await;
        let user = self.fetch_me().await?;
        *self.state.write().await = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    pub async fn logout(&self) {
        *self.state.write().await = SessionState::Anonymous;
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "could not clear stored tokens");
        }
        self.api.set_bearer(None).await;
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        self.auth.register(request).await
    }

    /// `GET /users/me` with the current bearer header.
    pub async fn fetch_me(&self) -> Result<UserInfo, ClientError> {
        self.api.get_json("/users/me", ME_FAILED).await
    }

    /// Check `access` against the current state.
    pub async fn authorize(&self, access: Access) -> Result<Option<UserInfo>, ClientError> {
        let state = self.state.read().await;
        require(access, &state)?;
        Ok(state.user().cloned())
    }
}
