pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::RegisterCommand;
pub(crate) use event::{RegisterEffect, RegisterEvent};
use iced::Task;
use model::RegisterViewModel;
use state::RegisterState;

/// Registration screen and the email confirmation notice that follows it.
pub(crate) struct RegisterWidget {
    state: RegisterState,
}

impl RegisterWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: RegisterState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: RegisterCommand,
    ) -> Task<RegisterEffect> {
        reducer::reduce(&mut self.state, command)
    }

    pub(crate) fn vm(&self) -> RegisterViewModel<'_> {
        RegisterViewModel {
            stage: self.state.stage(),
            email: self.state.email(),
            password: self.state.password(),
            confirm: self.state.confirm(),
            loading: self.state.is_loading(),
            email_error: self.state.email_error(),
            password_error: self.state.password_error(),
            confirm_error: self.state.confirm_error(),
        }
    }
}
