/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Error,
    Info,
    Success,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) text: String,
    pub(crate) kind: NoticeKind,
}

impl Notice {
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }

    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }
}

/// A single toast in the view model.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastItemVm<'a> {
    pub(crate) id: u64,
    pub(crate) notice: &'a Notice,
}

/// View model for the toast stack.
#[derive(Debug, Clone)]
pub(crate) struct ToastViewModel<'a> {
    pub(crate) toasts: Vec<ToastItemVm<'a>>,
}
