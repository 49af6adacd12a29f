pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::LoginCommand;
pub(crate) use event::{LoginEffect, LoginEvent};
use iced::Task;
use model::LoginViewModel;
use state::LoginState;

/// Login screen: password and provider sign-in.
pub(crate) struct LoginWidget {
    state: LoginState,
}

impl LoginWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: LoginState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(&mut self, command: LoginCommand) -> Task<LoginEffect> {
        reducer::reduce(&mut self.state, command)
    }

    pub(crate) fn vm(&self) -> LoginViewModel<'_> {
        LoginViewModel {
            email: self.state.email(),
            password: self.state.password(),
            loading: self.state.is_loading(),
            email_error: self.state.email_error(),
            password_error: self.state.password_error(),
        }
    }
}
