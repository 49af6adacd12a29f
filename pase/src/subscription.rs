use iced::Subscription;

use crate::app::{App, AppEvent};
use crate::widgets::toast::ToastEvent;
use crate::widgets::toast::event::TOAST_TICK_MS;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![key_subs];

    // Toast expiry tick
    if app.widgets.toast.has_toasts() {
        let tick =
            iced::time::every(std::time::Duration::from_millis(TOAST_TICK_MS))
                .map(|_| AppEvent::ToastUi(ToastEvent::Tick));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
