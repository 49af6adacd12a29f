pub(crate) mod command;
pub(crate) mod errors;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::AccountCommand;
pub(crate) use event::{AccountEffect, AccountEvent};
use iced::Task;
use model::{AccountViewModel, ProfileField};
use state::{AccountState, LoadPhase};

/// Account settings: profile name and avatar with a draft/baseline editing
/// pattern.
pub(crate) struct AccountWidget {
    state: AccountState,
}

impl AccountWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: AccountState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: AccountCommand,
    ) -> Task<AccountEffect> {
        reducer::reduce(&mut self.state, command)
    }

    pub(crate) fn vm(&self) -> AccountViewModel<'_> {
        AccountViewModel {
            loading: self.state.phase() == LoadPhase::Loading,
            loaded: self.state.phase() == LoadPhase::Ready,
            name_draft: self.state.name_draft(),
            name_error: self.state.name_error(),
            avatar_draft: self.state.avatar_draft(),
            avatar: self.state.preview(),
            can_save_name: self.state.is_name_dirty()
                && !self.state.is_saving(ProfileField::Name),
            can_save_avatar: self.state.is_avatar_dirty()
                && !self.state.is_saving(ProfileField::Avatar),
        }
    }
}
