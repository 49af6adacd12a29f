use pase_session::{AvatarVariant, Profile, ProfileUpdate};
use uuid::Uuid;

use super::model::ProfileField;
use crate::widgets::toast::Notice;

/// UI events emitted by the account page, plus async completions.
#[derive(Debug, Clone)]
pub(crate) enum AccountEvent {
    NameChanged(String),
    AvatarSelected(AvatarVariant),
    SaveName,
    SaveAvatar,
    Loaded {
        generation: u64,
        profile: Profile,
    },
    LoadFailed {
        generation: u64,
        message: String,
    },
    Saved {
        generation: u64,
        field: ProfileField,
        profile: Profile,
    },
    SaveFailed {
        generation: u64,
        field: ProfileField,
        message: String,
    },
    AvatarFetched { url: String, bytes: Vec<u8> },
    AvatarFetchFailed { url: String, message: String },
}

/// Effect events produced by the account reducer.
#[derive(Debug, Clone)]
pub(crate) enum AccountEffect {
    /// Read the signed-in user's profile.
    LoadRequested { generation: u64 },
    /// Persist `update` on profile `id`.
    UpdateRequested {
        generation: u64,
        id: Uuid,
        field: ProfileField,
        update: ProfileUpdate,
    },
    /// Download the avatar preview at `url`.
    FetchAvatar { url: String },
    Notify(Notice),
}
