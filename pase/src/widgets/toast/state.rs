use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::model::Notice;

/// Maximum number of toasts on screen at once.
pub(crate) const MAX_VISIBLE_TOASTS: usize = 4;
/// How long a toast stays on screen.
pub(crate) const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug)]
pub(crate) struct Toast {
    id: u64,
    notice: Notice,
    expires_at: Instant,
}

impl Toast {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn notice(&self) -> &Notice {
        &self.notice
    }
}

/// Queue of visible notifications, oldest first.
#[derive(Debug, Default)]
pub(crate) struct ToastState {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastState {
    pub(crate) fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Append `notice`, evicting the oldest toast when the stack is full.
    pub(crate) fn push(&mut self, notice: Notice, now: Instant) -> u64 {
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            notice,
            expires_at: now + TOAST_LIFETIME,
        });
        id
    }

    pub(crate) fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose lifetime ended at or before `now`.
    pub(crate) fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }
}
