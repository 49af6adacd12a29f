use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::toast::notify;
use crate::widgets::account::AccountCommand;
use crate::widgets::menu::{MenuCommand, MenuEffect, MenuEvent};

/// Tab whose content is the account settings page.
const ACCOUNT_TAB: &str = "settings";

/// Route a menu UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: MenuEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a menu command directly (used by the navigation router).
pub(crate) fn route_command(
    app: &mut App,
    command: MenuCommand,
) -> Task<AppEvent> {
    app.widgets.menu.reduce(command).map(AppEvent::MenuEffect)
}

/// Route a menu effect event to app-level tasks.
pub(crate) fn route_effect(app: &mut App, effect: MenuEffect) -> Task<AppEvent> {
    match effect {
        MenuEffect::Navigate { path } => Task::done(AppEvent::Navigate { path }),
        MenuEffect::SignOutRequested => sign_out(app),
        MenuEffect::Notify(notice) => notify(notice),
        MenuEffect::TabShown { tab } if tab == ACCOUNT_TAB => {
            Task::done(AppEvent::AccountCommand(AccountCommand::Load))
        },
        MenuEffect::TabShown { .. } => {
            Task::done(AppEvent::AccountCommand(AccountCommand::Unload))
        },
    }
}

fn sign_out(app: &App) -> Task<AppEvent> {
    let session = app.services.session.clone();
    Task::perform(async move { session.sign_out().await }, |result| {
        match result {
            Ok(()) => AppEvent::SessionChanged(None),
            Err(err) => AppEvent::MenuCommand(MenuCommand::SignOutFailed {
                message: err.to_string(),
            }),
        }
    })
}

fn map_event_to_command(event: MenuEvent) -> MenuCommand {
    match event {
        MenuEvent::SelectTab { tab } => MenuCommand::SelectTab { tab },
        MenuEvent::Scrolled { offset_y } => MenuCommand::Scrolled { offset_y },
        MenuEvent::SignOut => MenuCommand::SignOut,
    }
}

#[cfg(test)]
mod tests {
    use pase_session::User;
    use uuid::Uuid;

    use super::*;
    use crate::config::AppConfig;
    use crate::routers::navigation;

    fn signed_in_app() -> App {
        let (mut app, _) = App::new(AppConfig::default());
        let user = User {
            id: Uuid::from_u128(1),
            email: None,
        };
        let _ = navigation::session_restored(&mut app, Ok(Some(user)));
        app
    }

    #[test]
    fn given_mounted_shell_when_tab_selected_then_highlight_moves_before_url() {
        let mut app = signed_in_app();

        let _ = route_event(
            &mut app,
            MenuEvent::SelectTab {
                tab: String::from("vault"),
            },
        );

        assert_eq!(app.widgets.menu.vm().active_tab, "vault");
        assert_eq!(app.widgets.menu.url_tab(), Some("overview"));
        assert_eq!(app.navigator.current_path(), "/en/overview");
    }

    #[test]
    fn given_scrolled_shell_then_tab_bar_pins() {
        let mut app = signed_in_app();

        let _ = route_event(&mut app, MenuEvent::Scrolled { offset_y: 120.0 });

        assert!(app.widgets.menu.vm().is_fixed);
    }

    #[test]
    fn given_signed_out_app_when_scrolled_then_nothing_changes() {
        let (mut app, _) = App::new(AppConfig::default());
        let _ = navigation::session_restored(&mut app, Ok(None));

        let _ = route_event(&mut app, MenuEvent::Scrolled { offset_y: 120.0 });

        assert!(!app.widgets.menu.is_mounted());
        assert!(!app.widgets.menu.vm().is_fixed);
    }
}
