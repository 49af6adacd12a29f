//! In-process backend keeping accounts and profiles in memory. Used when no
//! remote backend is configured and as the stand-in collaborator in tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use secrecy::ExposeSecret;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::{
    AvatarVariant, Credentials, Profile, ProfileStore, ProfileUpdate,
    SessionBackend, SessionError, SignIn, SignInOutcome, User,
};

struct Account {
    user: User,
    password: Zeroizing<String>,
}

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<String, Account>,
    profiles: HashMap<Uuid, Profile>,
    current: Option<User>,
    sign_out_failure: Option<String>,
    profile_failure: Option<String>,
    sign_out_calls: usize,
}

/// Backend storing everything in process memory.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `sign_out` call fail with `message`.
    pub fn fail_sign_out(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.sign_out_failure = Some(message.into());
        }
    }

    /// Make every following profile call fail with `message`.
    pub fn fail_profiles(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.profile_failure = Some(message.into());
        }
    }

    /// Number of `sign_out` calls received so far.
    pub fn sign_out_calls(&self) -> usize {
        self.state
            .lock()
            .map(|state| state.sign_out_calls)
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, SessionError> {
        self.state.lock().map_err(|_| {
            SessionError::Unavailable(String::from(
                "session store is unavailable",
            ))
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn sign_in(
        &self,
        request: SignIn,
    ) -> Result<SignInOutcome, SessionError> {
        let credentials = match request {
            SignIn::Password(credentials) => credentials,
            SignIn::Provider(provider) => {
                return Err(SessionError::Unavailable(format!(
                    "{} sign-in requires an online backend",
                    provider.label()
                )));
            },
        };

        let mut state = self.lock()?;
        let key = normalize_email(&credentials.email);
        let user = match state.accounts.get(&key) {
            Some(account)
                if account.password.as_str()
                    == credentials.password.expose_secret() =>
            {
                account.user.clone()
            },
            _ => {
                return Err(SessionError::Rejected {
                    status: 400,
                    message: String::from("Invalid login credentials"),
                });
            },
        };

        state.current = Some(user.clone());
        Ok(SignInOutcome::SignedIn(user))
    }

    async fn sign_up(
        &self,
        credentials: Credentials,
    ) -> Result<User, SessionError> {
        let mut state = self.lock()?;
        let key = normalize_email(&credentials.email);
        if state.accounts.contains_key(&key) {
            return Err(SessionError::Rejected {
                status: 422,
                message: String::from("User already registered"),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            email: Some(key.clone()),
        };
        state.profiles.insert(
            user.id,
            Profile {
                id: user.id,
                full_name: String::new(),
                avatar_type: AvatarVariant::default(),
            },
        );
        state.accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: Zeroizing::new(
                    credentials.password.expose_secret().to_owned(),
                ),
            },
        );

        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;
        state.sign_out_calls += 1;
        if let Some(message) = &state.sign_out_failure {
            return Err(SessionError::Unavailable(message.clone()));
        }

        state.current = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.lock()?.current.clone())
    }
}

#[async_trait]
impl ProfileStore for MemoryBackend {
    async fn select(&self) -> Result<Vec<Profile>, SessionError> {
        let state = self.lock()?;
        if let Some(message) = &state.profile_failure {
            return Err(SessionError::Unavailable(message.clone()));
        }

        let user = state.current.as_ref().ok_or(SessionError::NotSignedIn)?;
        Ok(state.profiles.get(&user.id).cloned().into_iter().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, SessionError> {
        let mut state = self.lock()?;
        if let Some(message) = &state.profile_failure {
            return Err(SessionError::Unavailable(message.clone()));
        }

        let owner = state
            .current
            .as_ref()
            .map(|user| user.id)
            .ok_or(SessionError::NotSignedIn)?;
        if owner != id {
            return Err(SessionError::Rejected {
                status: 403,
                message: String::from("Profile belongs to another account"),
            });
        }

        let profile =
            state.profiles.get_mut(&id).ok_or(SessionError::Rejected {
                status: 404,
                message: String::from("Profile not found"),
            })?;
        profile.apply(&update);
        Ok(profile.clone())
    }
}
