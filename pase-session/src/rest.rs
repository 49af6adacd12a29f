//! HTTP backend speaking the GoTrue (`/auth/v1`) and PostgREST (`/rest/v1`)
//! dialects used by hosted backend-as-a-service projects.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::{
    AvatarVariant, Credentials, Profile, ProfileStore, ProfileUpdate,
    SessionBackend, SessionError, SessionTokens, SignIn, SignInOutcome,
    TokenStore, User,
};

const AUTH_TOKEN_PATH: &str = "auth/v1/token";
const AUTH_SIGNUP_PATH: &str = "auth/v1/signup";
const AUTH_LOGOUT_PATH: &str = "auth/v1/logout";
const AUTH_USER_PATH: &str = "auth/v1/user";
const AUTH_AUTHORIZE_PATH: &str = "auth/v1/authorize";
const PROFILE_PATH: &str = "rest/v1/profile";

/// Remote backend reached over HTTPS.
pub struct RestBackend {
    http: Client,
    base_url: Url,
    anon_key: String,
    redirect_to: Option<String>,
    session: Mutex<Option<SessionTokens>>,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl RestBackend {
    /// Create a backend for the project at `base_url` using its public
    /// `anon_key`.
    pub fn new(
        base_url: &str,
        anon_key: impl Into<String>,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url)?,
            anon_key: anon_key.into(),
            redirect_to: None,
            session: Mutex::new(None),
            token_store: None,
        })
    }

    /// Persist the session in `store` and resume the one it already holds.
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        let restored = match store.load() {
            Ok(tokens) => tokens,
            Err(err) => {
                log::warn!("stored session unreadable, discarding it: {err}");
                if let Err(err) = store.clear() {
                    log::warn!("failed to clear stored session: {err}");
                }
                None
            },
        };
        if restored.is_some() {
            log::info!("resuming stored session");
        }
        self.session = Mutex::new(restored);
        self.token_store = Some(store);
        self
    }

    /// Set the URL the OAuth provider returns to after authorization.
    pub fn with_redirect_to(mut self, redirect_to: impl Into<String>) -> Self {
        self.redirect_to = Some(redirect_to.into());
        self
    }

    /// Build the provider authorize URL opened in the browser.
    pub fn authorize_url(
        &self,
        provider: crate::Provider,
    ) -> Result<Url, SessionError> {
        let mut url = self.endpoint(AUTH_AUTHORIZE_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("provider", provider.as_str());
            if let Some(redirect_to) = &self.redirect_to {
                query.append_pair("redirect_to", redirect_to);
            }
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, SessionError> {
        Ok(self.base_url.join(path)?)
    }

    fn tokens(&self) -> Option<SessionTokens> {
        self.session
            .lock()
            .ok()
            .and_then(|session| session.as_ref().cloned())
    }

    /// Replace the session in memory and in the token store.
    fn store_session(&self, tokens: Option<SessionTokens>) {
        if let Some(store) = &self.token_store {
            let persisted = match &tokens {
                Some(tokens) => store.save(tokens),
                None => store.clear(),
            };
            if let Err(err) = persisted {
                log::warn!("failed to persist session: {err}");
            }
        }

        match self.session.lock() {
            Ok(mut slot) => *slot = tokens,
            Err(_) => log::warn!("session token slot is poisoned"),
        }
    }

    fn authorized(
        &self,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, SessionError> {
        let tokens = self.tokens().ok_or(SessionError::NotSignedIn)?;
        Ok(request
            .header("apikey", &self.anon_key)
            .bearer_auth(tokens.access_token.as_str()))
    }

    async fn fetch_user(&self) -> Result<User, SessionError> {
        let request =
            self.authorized(self.http.get(self.endpoint(AUTH_USER_PATH)?))?;
        let user: UserPayload = decode(request.send().await?).await?;
        Ok(user.into())
    }

    /// Trade the refresh token for a new session.
    async fn refresh(&self, refresh_token: &str) -> Result<(), SessionError> {
        let response = self
            .http
            .post(self.endpoint(AUTH_TOKEN_PATH)?)
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        let payload: TokenPayload = decode(response).await?;
        self.store_session(Some(payload.tokens()));
        Ok(())
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url, SessionError> {
    let mut url = Url::parse(base_url.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User {
            id: payload.id,
            email: payload.email,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: UserPayload,
}

impl TokenPayload {
    fn tokens(&self) -> SessionTokens {
        SessionTokens::new(
            self.access_token.clone(),
            self.refresh_token.clone(),
        )
    }
}

/// Signup answers with a session when confirmation is disabled and with the
/// bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpPayload {
    Session(TokenPayload),
    User(UserPayload),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorPayload {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: Uuid,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    avatar_type: Option<AvatarVariant>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            full_name: row.full_name.unwrap_or_default(),
            avatar_type: row.avatar_type.unwrap_or_default(),
        }
    }
}

/// Turn a non-success response into `SessionError::Rejected`.
async fn check(response: Response) -> Result<Response, SessionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorPayload>(&body)
        .ok()
        .and_then(ErrorPayload::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    log::warn!("backend rejected request: {status} {message}");

    Err(SessionError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(
    response: Response,
) -> Result<T, SessionError> {
    let body = check(response).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn password_body(credentials: &Credentials) -> serde_json::Value {
    serde_json::json!({
        "email": credentials.email.trim(),
        "password": credentials.password.expose_secret(),
    })
}

#[async_trait]
impl SessionBackend for RestBackend {
    async fn sign_in(
        &self,
        request: SignIn,
    ) -> Result<SignInOutcome, SessionError> {
        let credentials = match request {
            SignIn::Password(credentials) => credentials,
            SignIn::Provider(provider) => {
                let url = self.authorize_url(provider)?;
                return Ok(SignInOutcome::Redirect {
                    url: url.to_string(),
                });
            },
        };

        let response = self
            .http
            .post(self.endpoint(AUTH_TOKEN_PATH)?)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&password_body(&credentials))
            .send()
            .await?;
        let payload: TokenPayload = decode(response).await?;
        self.store_session(Some(payload.tokens()));

        Ok(SignInOutcome::SignedIn(payload.user.into()))
    }

    async fn sign_up(
        &self,
        credentials: Credentials,
    ) -> Result<User, SessionError> {
        let mut request = self
            .http
            .post(self.endpoint(AUTH_SIGNUP_PATH)?)
            .header("apikey", &self.anon_key)
            .json(&password_body(&credentials));
        if let Some(redirect_to) = &self.redirect_to {
            request = request.query(&[("redirect_to", redirect_to)]);
        }

        let payload: SignUpPayload = decode(request.send().await?).await?;
        match payload {
            SignUpPayload::Session(session) => {
                self.store_session(Some(session.tokens()));
                Ok(session.user.into())
            },
            SignUpPayload::User(user) => Ok(user.into()),
        }
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        if self.tokens().is_none() {
            return Ok(());
        }

        let request =
            self.authorized(self.http.post(self.endpoint(AUTH_LOGOUT_PATH)?))?;
        match check(request.send().await?).await {
            // An expired token is as good as revoked.
            Ok(_) | Err(SessionError::Rejected { status: 401, .. }) => {
                self.store_session(None);
                Ok(())
            },
            Err(err) => Err(err),
        }
    }

    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        let Some(tokens) = self.tokens() else {
            return Ok(None);
        };

        match self.fetch_user().await {
            Ok(user) => return Ok(Some(user)),
            Err(SessionError::Rejected { status: 401, .. }) => {},
            Err(err) => return Err(err),
        }

        let Some(refresh_token) = tokens.refresh_token else {
            self.store_session(None);
            return Ok(None);
        };
        match self.refresh(refresh_token.as_str()).await {
            Ok(()) => self.fetch_user().await.map(Some),
            Err(SessionError::Rejected { status, message }) => {
                log::info!("stored session expired ({status}): {message}");
                self.store_session(None);
                Ok(None)
            },
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl ProfileStore for RestBackend {
    async fn select(&self) -> Result<Vec<Profile>, SessionError> {
        let request = self.authorized(
            self.http
                .get(self.endpoint(PROFILE_PATH)?)
                .query(&[("select", "*")]),
        )?;
        let rows: Vec<ProfileRow> = decode(request.send().await?).await?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, SessionError> {
        let request = self.authorized(
            self.http
                .patch(self.endpoint(PROFILE_PATH)?)
                .query(&[("id", format!("eq.{id}"))])
                .header("Prefer", "return=representation")
                .json(&update),
        )?;
        let rows: Vec<ProfileRow> = decode(request.send().await?).await?;
        rows.into_iter().next().map(Profile::from).ok_or(
            SessionError::Rejected {
                status: 404,
                message: String::from("Profile not found"),
            },
        )
    }
}
