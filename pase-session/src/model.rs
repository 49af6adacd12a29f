use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated account as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Email and password pair submitted by the auth forms.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: SecretString::from(
                self.password.expose_secret().to_owned(),
            ),
        }
    }
}

/// Third-party identity providers offered on the auth screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::Google => "Google",
        }
    }
}

/// Sign-in request: either password credentials or an OAuth provider.
#[derive(Debug, Clone)]
pub enum SignIn {
    Password(Credentials),
    Provider(Provider),
}

/// Result of a successful sign-in request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// A session is established for the user.
    SignedIn(User),
    /// The flow continues in the browser at the given authorize URL.
    Redirect { url: String },
}

/// Generated avatar artwork style.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AvatarVariant {
    #[default]
    Beam,
    Marble,
}

impl AvatarVariant {
    pub const ALL: [AvatarVariant; 2] =
        [AvatarVariant::Beam, AvatarVariant::Marble];

    pub fn as_str(self) -> &'static str {
        match self {
            AvatarVariant::Beam => "beam",
            AvatarVariant::Marble => "marble",
        }
    }
}

impl fmt::Display for AvatarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `profile` record owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub avatar_type: AvatarVariant,
}

impl Profile {
    /// Apply a partial update in place.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name.clone_from(full_name);
        }
        if let Some(avatar_type) = update.avatar_type {
            self.avatar_type = avatar_type;
        }
    }
}

/// Partial profile change; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_type: Option<AvatarVariant>,
}

impl ProfileUpdate {
    pub fn full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            avatar_type: None,
        }
    }

    pub fn avatar_type(avatar_type: AvatarVariant) -> Self {
        Self {
            full_name: None,
            avatar_type: Some(avatar_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.avatar_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_avatar_update_when_applied_then_name_is_kept() {
        let mut profile = Profile {
            id: Uuid::nil(),
            full_name: String::from("Ada"),
            avatar_type: AvatarVariant::Beam,
        };

        profile.apply(&ProfileUpdate::avatar_type(AvatarVariant::Marble));

        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.avatar_type, AvatarVariant::Marble);
    }

    #[test]
    fn given_name_update_when_serialized_then_only_name_is_sent() {
        let json = serde_json::to_value(ProfileUpdate::full_name("Grace"))
            .expect("update should serialize");

        assert_eq!(json, serde_json::json!({ "full_name": "Grace" }));
    }

    #[test]
    fn given_cloned_credentials_then_password_is_preserved() {
        let credentials = Credentials::new(
            "ada@example.com",
            SecretString::from(String::from("hunter22")),
        );

        let cloned = credentials.clone();

        assert_eq!(cloned.email, "ada@example.com");
        assert_eq!(cloned.password.expose_secret(), "hunter22");
    }
}
