use iced::Task;
use pase_session::User;

use crate::app::{App, AppEvent};
use crate::guards::{RouteGuard, route_guard};
use crate::navigation::{LocaleTab, Route, resolve_locale};
use crate::routers::toast::notify;
use crate::routers::{account, login, menu};
use crate::widgets::account::AccountCommand;
use crate::widgets::login::LoginCommand;
use crate::widgets::menu::MenuCommand;
use crate::widgets::toast::Notice;

/// Upper bound on chained guard redirects for a single navigation.
const MAX_REDIRECTS: usize = 4;

/// Push `path` onto the history and show it.
pub(crate) fn navigate(app: &mut App, path: String) -> Task<AppEvent> {
    if !app.navigator.push(path.as_str()) {
        log::debug!("navigation to current path {path} ignored");
        return Task::none();
    }
    apply_route(app)
}

pub(crate) fn back(app: &mut App) -> Task<AppEvent> {
    if app.navigator.back().is_none() {
        return Task::none();
    }
    apply_route(app)
}

pub(crate) fn forward(app: &mut App) -> Task<AppEvent> {
    if app.navigator.forward().is_none() {
        return Task::none();
    }
    apply_route(app)
}

/// Record the session found at startup and show the initial route.
pub(crate) fn session_restored(
    app: &mut App,
    result: Result<Option<User>, String>,
) -> Task<AppEvent> {
    app.session_ready = true;
    match result {
        Ok(user) => {
            app.session = user;
            apply_route(app)
        },
        Err(message) => {
            log::warn!("session restore failed: {message}");
            app.session = None;
            Task::batch([apply_route(app), notify(Notice::error(message))])
        },
    }
}

/// Apply a sign-in or sign-out and re-run the guards on the current path.
pub(crate) fn session_changed(
    app: &mut App,
    user: Option<User>,
) -> Task<AppEvent> {
    app.session_ready = true;
    let reset = match &user {
        Some(user) => {
            log::info!("signed in as {}", user.id);
            Task::none()
        },
        None => {
            log::info!("signed out");
            login::route_command(app, LoginCommand::Reset)
        },
    };
    app.session = user;

    Task::batch([reset, apply_route(app)])
}

/// Guard the current path, following redirects, and sync the widgets with
/// the route that ends up on screen.
pub(crate) fn apply_route(app: &mut App) -> Task<AppEvent> {
    if !app.session_ready {
        return Task::none();
    }

    let signed_in = app.session.is_some();
    for _ in 0..MAX_REDIRECTS {
        let route =
            Route::parse(app.navigator.current_path(), app.widgets.menu.catalog());
        let guard = route_guard(
            &route,
            signed_in,
            &app.config.locale,
            app.widgets.menu.catalog(),
        );
        match guard {
            RouteGuard::Allow => {
                log::debug!("showing {}", route.path());
                return sync_widgets(app, &route);
            },
            RouteGuard::Redirect(path) => {
                log::debug!(
                    "redirecting {} to {path}",
                    app.navigator.current_path()
                );
                app.navigator.replace(path);
            },
        }
    }

    log::warn!(
        "too many redirects while resolving {}",
        app.navigator.current_path()
    );
    Task::none()
}

fn sync_widgets(app: &mut App, route: &Route) -> Task<AppEvent> {
    match resolve_locale(route) {
        Some(LocaleTab { locale, tabbar }) => {
            let command = if app.widgets.menu.is_mounted() {
                MenuCommand::UrlChanged {
                    locale,
                    tab: tabbar,
                }
            } else {
                MenuCommand::Mount {
                    locale,
                    tab: tabbar,
                }
            };
            menu::route_command(app, command)
        },
        None => Task::batch([
            menu::route_command(app, MenuCommand::Unmount),
            account::route_command(app, AccountCommand::Unload),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::config::AppConfig;

    fn user() -> User {
        User {
            id: Uuid::from_u128(1),
            email: Some(String::from("ada@example.com")),
        }
    }

    fn signed_in_app() -> App {
        let (mut app, _) = App::new(AppConfig::default());
        let _ = session_restored(&mut app, Ok(Some(user())));
        app
    }

    #[test]
    fn given_pending_session_when_navigating_then_route_is_not_applied() {
        let (mut app, _) = App::new(AppConfig::default());

        let _ = navigate(&mut app, String::from("/en/vault"));

        assert_eq!(app.navigator.current_path(), "/en/vault");
        assert!(!app.widgets.menu.is_mounted());
    }

    #[test]
    fn given_no_session_when_restored_then_login_replaces_root() {
        let (mut app, _) = App::new(AppConfig::default());

        let _ = session_restored(&mut app, Ok(None));

        assert_eq!(app.navigator.current_path(), "/login");
        assert!(app.navigator.back().is_none());
        assert!(!app.widgets.menu.is_mounted());
    }

    #[test]
    fn given_session_when_restored_then_home_tab_is_mounted() {
        let app = signed_in_app();

        assert_eq!(app.navigator.current_path(), "/en/overview");
        assert_eq!(app.widgets.menu.url_tab(), Some("overview"));
    }

    #[test]
    fn given_signed_in_app_when_navigating_to_tab_then_menu_follows_url() {
        let mut app = signed_in_app();

        let _ = navigate(&mut app, String::from("/en/vault"));

        assert_eq!(app.widgets.menu.url_tab(), Some("vault"));
        assert_eq!(app.widgets.menu.vm().active_tab, "vault");
    }

    #[test]
    fn given_history_when_going_back_then_previous_tab_is_shown() {
        let mut app = signed_in_app();
        let _ = navigate(&mut app, String::from("/en/vault"));
        let _ = navigate(&mut app, String::from("/en/settings"));

        let _ = back(&mut app);

        assert_eq!(app.navigator.current_path(), "/en/vault");
        assert_eq!(app.widgets.menu.url_tab(), Some("vault"));

        let _ = forward(&mut app);

        assert_eq!(app.widgets.menu.url_tab(), Some("settings"));
    }

    #[test]
    fn given_signed_in_app_when_signed_out_then_login_is_shown() {
        let mut app = signed_in_app();
        let _ = navigate(&mut app, String::from("/en/vault"));

        let _ = session_changed(&mut app, None);

        assert!(app.session.is_none());
        assert_eq!(app.navigator.current_path(), "/login");
        assert!(!app.widgets.menu.is_mounted());
    }

    #[test]
    fn given_login_page_when_signed_in_then_home_is_shown() {
        let (mut app, _) = App::new(AppConfig::default());
        let _ = session_restored(&mut app, Ok(None));

        let _ = session_changed(&mut app, Some(user()));

        assert_eq!(app.navigator.current_path(), "/en/overview");
        assert!(app.widgets.menu.is_mounted());
    }

    #[test]
    fn given_locale_root_when_navigating_then_locale_home_is_shown() {
        let mut app = signed_in_app();

        let _ = navigate(&mut app, String::from("/u"));

        assert_eq!(app.navigator.current_path(), "/u/overview");
        assert_eq!(app.widgets.menu.url_tab(), Some("overview"));
    }
}
