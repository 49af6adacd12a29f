use iced::widget::svg;
use pase_session::{AvatarVariant, Profile};

use super::errors::AccountError;
use super::model::ProfileField;

/// Profile loading progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LoadPhase {
    #[default]
    Unloaded,
    Loading,
    Ready,
}

/// Account page state: the persisted profile as baseline plus form drafts.
#[derive(Debug, Default)]
pub(crate) struct AccountState {
    phase: LoadPhase,
    /// Bumped on every load so results of earlier loads can be told apart.
    generation: u64,
    baseline: Option<Profile>,
    name_draft: String,
    name_error: Option<AccountError>,
    avatar_draft: AvatarVariant,
    preview_url: Option<String>,
    preview: Option<svg::Handle>,
    saving_name: bool,
    saving_avatar: bool,
}

impl AccountState {
    pub(crate) fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub(crate) fn baseline(&self) -> Option<&Profile> {
        self.baseline.as_ref()
    }

    pub(crate) fn name_draft(&self) -> &str {
        &self.name_draft
    }

    pub(crate) fn name_error(&self) -> Option<&AccountError> {
        self.name_error.as_ref()
    }

    pub(crate) fn avatar_draft(&self) -> AvatarVariant {
        self.avatar_draft
    }

    pub(crate) fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub(crate) fn preview(&self) -> Option<&svg::Handle> {
        self.preview.as_ref()
    }

    pub(crate) fn is_saving(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Name => self.saving_name,
            ProfileField::Avatar => self.saving_avatar,
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new load and return its generation.
    pub(crate) fn begin_loading(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = LoadPhase::Loading;
        self.generation
    }

    pub(crate) fn fail_loading(&mut self) {
        self.phase = LoadPhase::Unloaded;
    }

    /// Adopt `profile` as the persisted baseline and reset the drafts to it.
    pub(crate) fn load(&mut self, profile: Profile) {
        self.name_draft.clone_from(&profile.full_name);
        self.avatar_draft = profile.avatar_type;
        self.name_error = None;
        self.baseline = Some(profile);
        self.phase = LoadPhase::Ready;
    }

    pub(crate) fn set_name_draft(&mut self, name: String) {
        self.name_draft = name;
        self.name_error = None;
    }

    pub(crate) fn set_name_error(&mut self, error: AccountError) {
        self.name_error = Some(error);
    }

    pub(crate) fn set_avatar_draft(&mut self, variant: AvatarVariant) {
        self.avatar_draft = variant;
    }

    /// Point the preview at `url`. Returns `false` when it already does.
    pub(crate) fn set_preview_url(&mut self, url: String) -> bool {
        if self.preview_url.as_deref() == Some(url.as_str()) {
            return false;
        }
        self.preview_url = Some(url);
        true
    }

    pub(crate) fn set_preview(&mut self, bytes: Vec<u8>) {
        self.preview = Some(svg::Handle::from_memory(bytes));
    }

    pub(crate) fn set_saving(&mut self, field: ProfileField, saving: bool) {
        match field {
            ProfileField::Name => self.saving_name = saving,
            ProfileField::Avatar => self.saving_avatar = saving,
        }
    }

    /// Record a persisted profile as the new baseline; drafts are kept.
    pub(crate) fn mark_saved(&mut self, profile: Profile) {
        self.baseline = Some(profile);
    }

    pub(crate) fn is_name_dirty(&self) -> bool {
        self.baseline
            .as_ref()
            .is_some_and(|profile| profile.full_name != self.name_draft.trim())
    }

    pub(crate) fn is_avatar_dirty(&self) -> bool {
        self.baseline
            .as_ref()
            .is_some_and(|profile| profile.avatar_type != self.avatar_draft)
    }

    /// Drop the profile and drafts. The generation is kept so results of
    /// the dropped load stay stale.
    pub(crate) fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }
}
