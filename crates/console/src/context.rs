use std::sync::Arc;

use anyhow::Context as _;

use ecclesia_auth::{Access, UserInfo};
use ecclesia_client::services::cep::CepLookup;
use ecclesia_client::{ApiClient, ClientConfig, FileTokenStore, Session};

/// Everything a command needs: the backend session and the resolved config.
pub struct Context {
    pub config: ClientConfig,
    pub session: Session,
}

impl Context {
    /// Open the token file, build the session and revalidate any stored token.
    pub async fn connect(config: ClientConfig) -> anyhow::Result<Self> {
        let store = FileTokenStore::open(config.token_file.as_deref())
            .context("locating the session token file")?;
        tracing::debug!(path = %store.path().display(), "using token file");
        let session = Session::connect(&config, Arc::new(store))?;
        session.bootstrap().await;
        Ok(Self { config, session })
    }

    pub fn api(&self) -> &ApiClient {
        self.session.api()
    }

    /// Fail unless the session satisfies `access`.
    pub async fn guard(&self, access: Access) -> anyhow::Result<Option<UserInfo>> {
        Ok(self.session.authorize(access).await?)
    }

    pub fn cep(&self) -> CepLookup {
        CepLookup::new(self.api().http().clone(), &self.config.cep_url)
    }
}
