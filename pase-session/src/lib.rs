//! Session and profile contract for the Pase vault client.
//!
//! The application never talks to the backend directly: it holds the
//! [`SessionBackend`] and [`ProfileStore`] trait objects and swaps the
//! implementation depending on configuration.

mod backend;
mod errors;
mod memory;
mod model;
mod rest;
mod tokens;

pub use crate::backend::{ProfileStore, SessionBackend};
pub use crate::errors::SessionError;
pub use crate::memory::MemoryBackend;
pub use crate::model::{
    AvatarVariant, Credentials, Profile, ProfileUpdate, Provider, SignIn,
    SignInOutcome, User,
};
pub use crate::rest::RestBackend;
pub use crate::tokens::{FileTokenStore, SessionTokens, TokenStore};
