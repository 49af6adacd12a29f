use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::toast::{Notice, ToastCommand, ToastEvent};

/// Route a toast UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: ToastEvent) -> Task<AppEvent> {
    let command = match event {
        ToastEvent::Dismiss { id } => ToastCommand::Dismiss { id },
        ToastEvent::Tick => ToastCommand::Tick {
            now: Instant::now(),
        },
    };
    route_command(app, command)
}

/// Route a toast command directly (used by other routers).
pub(crate) fn route_command(
    app: &mut App,
    command: ToastCommand,
) -> Task<AppEvent> {
    app.widgets.toast.reduce(command);
    Task::none()
}

/// Task delivering `notice` to the toast stack.
pub(crate) fn notify(notice: Notice) -> Task<AppEvent> {
    Task::done(AppEvent::ToastCommand(ToastCommand::Push(notice)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn given_pushed_notice_when_ticked_immediately_then_it_stays() {
        let (mut app, _) = App::new(AppConfig::default());

        let _ = route_command(
            &mut app,
            ToastCommand::Push(Notice::info("Continue from your browser")),
        );
        let _ = route_event(&mut app, ToastEvent::Tick);

        assert!(app.widgets.toast.has_toasts());
        let vm = app.widgets.toast.vm();
        assert_eq!(vm.toasts.len(), 1);
        assert_eq!(vm.toasts[0].notice.text, "Continue from your browser");
    }
}
