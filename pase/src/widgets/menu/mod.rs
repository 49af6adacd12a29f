pub(crate) mod catalog;
pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::MenuCommand;
pub(crate) use event::{MenuEffect, MenuEvent};
use iced::Task;
use model::MenuViewModel;

use self::catalog::TabCatalog;
use self::state::MenuState;

/// Navigation controller: keeps the active tab in step with the URL, pins
/// the tab bar on scroll and starts sign-out.
pub(crate) struct MenuWidget {
    state: MenuState,
}

impl MenuWidget {
    /// Create an unmounted widget over `catalog`.
    pub(crate) fn new(catalog: TabCatalog) -> Self {
        Self {
            state: MenuState::new(catalog),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(&mut self, command: MenuCommand) -> Task<MenuEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> MenuViewModel<'_> {
        let catalog = self.state.catalog();
        MenuViewModel {
            tabs: catalog.entries(),
            active_tab: self.state.active_tab(),
            active_entry: catalog.find(self.state.active_tab()),
            is_fixed: self.state.is_fixed(),
        }
    }

    pub(crate) fn catalog(&self) -> &TabCatalog {
        self.state.catalog()
    }

    /// Return whether the shell is on screen.
    pub(crate) fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Return the tab shown by the current URL.
    pub(crate) fn url_tab(&self) -> Option<&str> {
        self.state.is_mounted().then(|| self.state.url_tab())
    }
}
