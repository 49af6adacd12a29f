pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::ToastCommand;
pub(crate) use event::ToastEvent;
pub(crate) use model::{Notice, NoticeKind};
use model::{ToastItemVm, ToastViewModel};
use state::ToastState;

/// Toast widget: a short-lived stack of notifications.
pub(crate) struct ToastWidget {
    state: ToastState,
}

impl ToastWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ToastState::default(),
        }
    }

    /// Reduce a toast command into state updates.
    pub(crate) fn reduce(&mut self, command: ToastCommand) {
        reducer::reduce(&mut self.state, command);
    }

    pub(crate) fn vm(&self) -> ToastViewModel<'_> {
        ToastViewModel {
            toasts: self
                .state
                .toasts()
                .map(|toast| ToastItemVm {
                    id: toast.id(),
                    notice: toast.notice(),
                })
                .collect(),
        }
    }

    /// Return whether the expiry tick needs to run.
    pub(crate) fn has_toasts(&self) -> bool {
        !self.state.is_empty()
    }
}
