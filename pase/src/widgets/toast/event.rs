/// Tick period of the expiry subscription.
pub(crate) const TOAST_TICK_MS: u64 = 250;

/// UI events emitted by the toast stack.
#[derive(Debug, Clone)]
pub(crate) enum ToastEvent {
    /// The close button of a toast was pressed.
    Dismiss { id: u64 },
    /// Expiry timer tick.
    Tick,
}
