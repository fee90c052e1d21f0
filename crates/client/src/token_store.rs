//! Persistence for the access/refresh token pair.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecclesia_auth::AuthTokens;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("token file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("no configuration directory for this platform")]
    NoConfigDir,
    #[error("token store lock poisoned")]
    Poisoned,
}

/// What survives between runs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl StoredTokens {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

impl From<&AuthTokens> for StoredTokens {
    fn from(tokens: &AuthTokens) -> Self {
        Self {
            access_token: Some(tokens.access_token.clone()),
            refresh_token: tokens.refresh_token.clone(),
        }
    }
}

impl core::fmt::Debug for StoredTokens {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StoredTokens")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Token persistence used by the session.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<StoredTokens, StoreError>;
    fn save(&self, tokens: &StoredTokens) -> Result<(), StoreError>;
    /// Remove both tokens. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), StoreError>;
}

/// JSON file, by default under the user's configuration directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/ecclesia/session.json`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let mut dir = dirs::config_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".config");
                    h
                })
            })
            .ok_or(StoreError::NoConfigDir)?;
        dir.push("ecclesia");
        dir.push("session.json");
        Ok(dir)
    }

    /// Store at `path`, or at [`FileTokenStore::default_path`] when `None`.
    pub fn open(path: Option<&Path>) -> Result<Self, StoreError> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<StoredTokens, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(StoredTokens::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoredTokens::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, tokens: &StoredTokens) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_vec_pretty(tokens)?;
        let mut file = open_private(&self.path)?;
        file.write_all(&body)?;
        file.sync_all()?;
        tracing::debug!(path = %self.path.display(), "tokens saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Open for writing, owner-only on unix. A new file is created with mode 0600
/// and an existing one is narrowed to 0600 before it is truncated.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.set_len(0)?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// In-process store (tests, one-shot scripts).
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            tokens: Mutex::new(StoredTokens {
                access_token: Some(token.into()),
                refresh_token: None,
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<StoredTokens, StoreError> {
        self.tokens
            .lock()
            .map(|t| t.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn save(&self, tokens: &StoredTokens) -> Result<(), StoreError> {
        let mut guard = self.tokens.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = tokens.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.tokens.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = StoredTokens::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> StoredTokens {
        StoredTokens {
            access_token: Some("access".into()),
            refresh_token: Some("refresh".into()),
        }
    }

    #[test]
    fn memory_store_round_trip_and_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_empty());
        store.save(&pair()).unwrap();
        assert_eq!(store.load().unwrap(), pair());
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(pair()).unwrap();
        assert_eq!(json["accessToken"], "access");
        assert_eq!(json["refreshToken"], "refresh");
    }

    #[test]
    fn debug_hides_tokens() {
        let shown = format!("{:?}", pair());
        assert!(!shown.contains("\"access\"") && !shown.contains("\"refresh\""));
    }
}
