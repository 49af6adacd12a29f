use iced::widget::svg;
use pase_session::AvatarVariant;
use uuid::Uuid;

use super::errors::AccountError;

/// Side length requested from the avatar service, in pixels.
pub(crate) const AVATAR_SIZE: u32 = 78;
const AVATAR_SERVICE_URL: &str = "https://source.boringavatars.com";

/// URL of the generated avatar for `id` in the given style.
pub(crate) fn avatar_url(variant: AvatarVariant, id: Uuid) -> String {
    format!("{AVATAR_SERVICE_URL}/{variant}/{AVATAR_SIZE}/{id}")
}

/// Profile field touched by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileField {
    Name,
    Avatar,
}

impl ProfileField {
    pub(crate) fn saved_message(self) -> &'static str {
        match self {
            ProfileField::Name => "Account name updated",
            ProfileField::Avatar => "Avatar updated",
        }
    }
}

/// View model for the account settings page.
#[derive(Debug, Clone)]
pub(crate) struct AccountViewModel<'a> {
    pub(crate) loading: bool,
    pub(crate) loaded: bool,
    pub(crate) name_draft: &'a str,
    pub(crate) name_error: Option<&'a AccountError>,
    pub(crate) avatar_draft: AvatarVariant,
    pub(crate) avatar: Option<&'a svg::Handle>,
    pub(crate) can_save_name: bool,
    pub(crate) can_save_avatar: bool,
}
