/// Commands processed by the navigation controller reducer.
#[derive(Debug, Clone)]
pub(crate) enum MenuCommand {
    Mount { locale: String, tab: String },
    UrlChanged { locale: String, tab: String },
    SelectTab { tab: String },
    Scrolled { offset_y: f32 },
    SignOut,
    SignOutFailed { message: String },
    Unmount,
}
