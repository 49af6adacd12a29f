use std::time::Instant;

use super::model::Notice;

/// Commands processed by the toast reducer.
#[derive(Debug, Clone)]
pub(crate) enum ToastCommand {
    Push(Notice),
    Dismiss { id: u64 },
    Tick { now: Instant },
}
