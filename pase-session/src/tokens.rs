//! Persistence of the session tokens across restarts.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::SessionError;

/// Tokens of an authenticated session.
#[derive(Clone)]
pub struct SessionTokens {
    pub access_token: Zeroizing<String>,
    pub refresh_token: Option<Zeroizing<String>>,
}

impl SessionTokens {
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Zeroizing::new(access_token),
            refresh_token: refresh_token.map(Zeroizing::new),
        }
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Where session tokens survive between runs.
pub trait TokenStore: Send + Sync {
    /// Return the stored session, if any.
    fn load(&self) -> Result<Option<SessionTokens>, SessionError>;

    fn save(&self, tokens: &SessionTokens) -> Result<(), SessionError>;

    /// Forget the stored session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Serialize)]
struct TokenFileRef<'a> {
    access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

#[derive(Deserialize)]
struct TokenFile {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Token store backed by a JSON file readable only by the current user.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SessionTokens>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => Zeroizing::new(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            },
            Err(err) => return Err(err.into()),
        };

        let file: TokenFile = serde_json::from_str(&content)?;
        Ok(Some(SessionTokens::new(file.access_token, file.refresh_token)))
    }

    fn save(&self, tokens: &SessionTokens) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let payload = Zeroizing::new(serde_json::to_string(&TokenFileRef {
            access_token: tokens.access_token.as_str(),
            refresh_token: tokens.refresh_token.as_ref().map(|t| t.as_str()),
        })?);

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = private_file(&tmp_path)?;
        file.write_all(payload.as_bytes())?;
        file.sync_all()?;
        std::fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(unix)]
fn private_file(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn private_file(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileTokenStore {
        let dir = std::env::temp_dir()
            .join(format!("pase-tokens-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        FileTokenStore::new(dir.join("session.json"))
    }

    #[test]
    fn given_missing_file_when_loaded_then_no_session() {
        let store = temp_store("missing");

        assert!(store.load().expect("missing file is fine").is_none());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn given_saved_tokens_when_loaded_by_another_store_then_they_match() {
        let store = temp_store("saved");
        store
            .save(&SessionTokens::new(
                String::from("access"),
                Some(String::from("refresh")),
            ))
            .expect("save succeeds");

        let loaded = FileTokenStore::new(store.path())
            .load()
            .expect("load succeeds")
            .expect("session stored");

        assert_eq!(loaded.access_token.as_str(), "access");
        assert_eq!(
            loaded.refresh_token.as_ref().map(|t| t.as_str()),
            Some("refresh")
        );
    }

    #[test]
    fn given_saved_tokens_when_cleared_then_nothing_is_loaded() {
        let store = temp_store("cleared");
        store
            .save(&SessionTokens::new(String::from("access"), None))
            .expect("save succeeds");

        store.clear().expect("clear succeeds");

        assert!(store.load().expect("load succeeds").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn given_saved_tokens_then_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let store = temp_store("private");
        store
            .save(&SessionTokens::new(String::from("access"), None))
            .expect("save succeeds");

        let mode = std::fs::metadata(store.path())
            .expect("file exists")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
