use iced::Task;
use pase_session::{AvatarVariant, Profile, ProfileUpdate};

use super::command::AccountCommand;
use super::errors::validate_name;
use super::event::AccountEffect;
use super::model::{ProfileField, avatar_url};
use super::state::{AccountState, LoadPhase};
use crate::widgets::toast::Notice;

/// Reduce an account command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut AccountState,
    command: AccountCommand,
) -> Task<AccountEffect> {
    Task::batch(effects(state, command).into_iter().map(Task::done))
}

fn effects(
    state: &mut AccountState,
    command: AccountCommand,
) -> Vec<AccountEffect> {
    use AccountCommand as C;

    match command {
        C::Load => {
            if state.phase() == LoadPhase::Loading {
                return Vec::new();
            }
            let generation = state.begin_loading();
            vec![AccountEffect::LoadRequested { generation }]
        },
        C::Unload => {
            state.reset();
            Vec::new()
        },
        C::Loaded {
            generation,
            profile,
        } => loaded(state, generation, profile),
        C::LoadFailed {
            generation,
            message,
        } => {
            if !is_pending_load(state, generation) {
                log::debug!("stale profile load failure dropped: {message}");
                return Vec::new();
            }
            log::warn!("profile load failed: {message}");
            state.fail_loading();
            vec![AccountEffect::Notify(Notice::error(message))]
        },
        C::NameChanged(name) => {
            state.set_name_draft(name);
            Vec::new()
        },
        C::AvatarSelected(variant) => select_avatar(state, variant),
        C::SaveName => save_name(state),
        C::SaveAvatar => save_avatar(state),
        C::Saved {
            generation,
            field,
            profile,
        } => {
            if generation != state.generation() {
                return Vec::new();
            }
            let Some(baseline) = state.baseline() else {
                return Vec::new();
            };
            if baseline.id != profile.id {
                return Vec::new();
            }
            state.set_saving(field, false);
            state.mark_saved(profile);
            vec![AccountEffect::Notify(Notice::success(field.saved_message()))]
        },
        C::SaveFailed {
            generation,
            field,
            message,
        } => {
            if generation != state.generation() || state.baseline().is_none() {
                return Vec::new();
            }
            log::warn!("profile update failed: {message}");
            state.set_saving(field, false);
            vec![AccountEffect::Notify(Notice::error(message))]
        },
        C::AvatarFetched { url, bytes } => {
            if state.preview_url() == Some(url.as_str()) {
                state.set_preview(bytes);
            }
            Vec::new()
        },
        C::AvatarFetchFailed { url, message } => {
            if state.preview_url() == Some(url.as_str()) {
                log::warn!("avatar preview fetch failed for {url}: {message}");
            }
            Vec::new()
        },
    }
}

fn is_pending_load(state: &AccountState, generation: u64) -> bool {
    state.phase() == LoadPhase::Loading && state.generation() == generation
}

fn loaded(
    state: &mut AccountState,
    generation: u64,
    profile: Profile,
) -> Vec<AccountEffect> {
    if !is_pending_load(state, generation) {
        return Vec::new();
    }

    let url = avatar_url(profile.avatar_type, profile.id);
    state.load(profile);
    state.set_preview_url(url.clone());
    vec![AccountEffect::FetchAvatar { url }]
}

fn select_avatar(
    state: &mut AccountState,
    variant: AvatarVariant,
) -> Vec<AccountEffect> {
    let Some(id) = state.baseline().map(|profile| profile.id) else {
        return Vec::new();
    };

    state.set_avatar_draft(variant);
    let url = avatar_url(variant, id);
    if !state.set_preview_url(url.clone()) {
        return Vec::new();
    }
    vec![AccountEffect::FetchAvatar { url }]
}

fn save_name(state: &mut AccountState) -> Vec<AccountEffect> {
    let Some(id) = state.baseline().map(|profile| profile.id) else {
        return Vec::new();
    };
    if state.is_saving(ProfileField::Name) {
        return Vec::new();
    }
    if let Err(err) = validate_name(state.name_draft()) {
        state.set_name_error(err);
        return Vec::new();
    }

    let update = ProfileUpdate::full_name(state.name_draft().trim());
    state.set_saving(ProfileField::Name, true);
    vec![AccountEffect::UpdateRequested {
        generation: state.generation(),
        id,
        field: ProfileField::Name,
        update,
    }]
}

fn save_avatar(state: &mut AccountState) -> Vec<AccountEffect> {
    let Some(id) = state.baseline().map(|profile| profile.id) else {
        return Vec::new();
    };
    if state.is_saving(ProfileField::Avatar) {
        return Vec::new();
    }

    state.set_saving(ProfileField::Avatar, true);
    vec![AccountEffect::UpdateRequested {
        generation: state.generation(),
        id,
        field: ProfileField::Avatar,
        update: ProfileUpdate::avatar_type(state.avatar_draft()),
    }]
}
