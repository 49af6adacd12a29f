use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    Credentials, Profile, ProfileUpdate, SessionError, SignIn, SignInOutcome,
    User,
};

/// Authentication and session lifecycle.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn sign_in(
        &self,
        request: SignIn,
    ) -> Result<SignInOutcome, SessionError>;

    /// Register a new account. The returned user usually still has to
    /// confirm the address before signing in.
    async fn sign_up(
        &self,
        credentials: Credentials,
    ) -> Result<User, SessionError>;

    async fn sign_out(&self) -> Result<(), SessionError>;

    /// Return the user owning the current session, if any.
    async fn current_user(&self) -> Result<Option<User>, SessionError>;
}

/// Access to the `profile` records visible to the current session.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn select(&self) -> Result<Vec<Profile>, SessionError>;

    async fn update(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, SessionError>;
}
