use iced::Task;
use iced::keyboard::{self, Key, key};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Session
        AppEvent::SessionRestored(result) => {
            routers::navigation::session_restored(app, result)
        },
        AppEvent::SessionChanged(user) => {
            routers::navigation::session_changed(app, user)
        },
        // Navigation
        AppEvent::Navigate { path } => routers::navigation::navigate(app, path),
        AppEvent::HistoryBack => routers::navigation::back(app),
        AppEvent::HistoryForward => routers::navigation::forward(app),
        // Menu widget
        AppEvent::MenuUi(event) => routers::menu::route_event(app, event),
        AppEvent::MenuEffect(effect) => routers::menu::route_effect(app, effect),
        AppEvent::MenuCommand(command) => {
            routers::menu::route_command(app, command)
        },
        // Login widget
        AppEvent::LoginUi(event) => routers::login::route_event(app, event),
        AppEvent::LoginEffect(effect) => {
            routers::login::route_effect(app, effect)
        },
        // Register widget
        AppEvent::RegisterUi(event) => {
            routers::register::route_event(app, event)
        },
        AppEvent::RegisterEffect(effect) => {
            routers::register::route_effect(app, effect)
        },
        // Account widget
        AppEvent::AccountUi(event) => routers::account::route_event(app, event),
        AppEvent::AccountEffect(effect) => {
            routers::account::route_effect(app, effect)
        },
        AppEvent::AccountCommand(command) => {
            routers::account::route_command(app, command)
        },
        // Toast widget
        AppEvent::ToastUi(event) => routers::toast::route_event(app, event),
        AppEvent::ToastCommand(command) => {
            routers::toast::route_command(app, command)
        },
        // Direct operations
        AppEvent::Keyboard(event) => handle_keyboard(event),
    }
}

fn handle_keyboard(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };
    if !modifiers.alt() {
        return Task::none();
    }

    match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) => Task::done(AppEvent::HistoryBack),
        Key::Named(key::Named::ArrowRight) => {
            Task::done(AppEvent::HistoryForward)
        },
        _ => Task::none(),
    }
}
