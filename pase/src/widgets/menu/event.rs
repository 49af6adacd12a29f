use crate::widgets::toast::Notice;

/// UI events emitted by the shell chrome.
#[derive(Debug, Clone)]
pub(crate) enum MenuEvent {
    /// A tab button was pressed.
    SelectTab { tab: String },
    /// The content area scrolled to the given vertical offset.
    Scrolled { offset_y: f32 },
    /// The Log Out button was pressed.
    SignOut,
}

/// Effect events produced by the menu reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MenuEffect {
    /// Move the router to `path`.
    Navigate { path: String },
    /// Ask the session backend to end the session.
    SignOutRequested,
    /// Surface a notification.
    Notify(Notice),
    /// The URL now shows `tab`; tab content may need loading.
    TabShown { tab: String },
}
