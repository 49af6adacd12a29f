use pase_session::{AvatarVariant, Profile};

use super::model::ProfileField;

/// Commands processed by the account reducer.
#[derive(Debug, Clone)]
pub(crate) enum AccountCommand {
    Load,
    Unload,
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
