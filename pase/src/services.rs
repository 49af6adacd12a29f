use std::sync::Arc;

use pase_session::{
    FileTokenStore, MemoryBackend, ProfileStore, RestBackend, SessionBackend,
    SessionError,
};

use crate::config::{AppConfig, BackendMode, session_path};

/// Backend collaborators shared by the routers.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) session: Arc<dyn SessionBackend>,
    pub(crate) profiles: Arc<dyn ProfileStore>,
    pub(crate) http: reqwest::Client,
}

impl Services {
    /// Build the collaborators selected by `config`, falling back to the
    /// in-memory backend when the remote one cannot be created.
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        match config.backend_mode() {
            BackendMode::Remote { url, anon_key } => {
                match RestBackend::new(url, anon_key) {
                    Ok(backend) => {
                        let backend = backend.with_token_store(Arc::new(
                            FileTokenStore::new(session_path()),
                        ));
                        let backend = match &config.oauth_redirect_url {
                            Some(redirect) => backend.with_redirect_to(redirect),
                            None => backend,
                        };
                        log::info!("using remote backend at {url}");
                        Self::with_backend(Arc::new(backend))
                    },
                    Err(err) => {
                        log::warn!(
                            "remote backend unavailable, running offline: {err}"
                        );
                        Self::offline()
                    },
                }
            },
            BackendMode::Offline => {
                log::info!("no backend configured, running offline");
                Self::offline()
            },
        }
    }

    pub(crate) fn offline() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    fn with_backend<B>(backend: Arc<B>) -> Self
    where
        B: SessionBackend + ProfileStore + 'static,
    {
        Self {
            session: backend.clone(),
            profiles: backend,
            http: reqwest::Client::new(),
        }
    }
}

/// Download the avatar image at `url`.
pub(crate) async fn fetch_avatar(
    http: reqwest::Client,
    url: String,
) -> Result<Vec<u8>, SessionError> {
    let response = http.get(&url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Open `url` in the system browser.
pub(crate) fn open_in_browser(url: &str) -> Result<(), String> {
    open::that(url).map_err(|err| format!("failed to open browser: {err}"))
}

#[cfg(test)]
mod tests {
    use pase_session::{Credentials, SignIn, SignInOutcome};
    use secrecy::SecretString;

    use super::*;

    #[tokio::test]
    async fn given_offline_config_then_session_and_profiles_share_a_backend() {
        let services = Services::from_config(&AppConfig::default());
        let credentials = Credentials::new(
            "ada@example.com",
            SecretString::from(String::from("secret1")),
        );

        services
            .session
            .sign_up(credentials.clone())
            .await
            .expect("sign up should succeed");
        let outcome = services
            .session
            .sign_in(SignIn::Password(credentials))
            .await
            .expect("sign in should succeed");
        let profiles =
            services.profiles.select().await.expect("select should succeed");

        let SignInOutcome::SignedIn(user) = outcome else {
            panic!("offline sign in should establish a session");
        };
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, user.id);
    }
}
