use super::catalog::TabEntry;

/// View model for the shell chrome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuViewModel<'a> {
    pub(crate) tabs: &'a [TabEntry],
    pub(crate) active_tab: &'a str,
    pub(crate) active_entry: Option<&'a TabEntry>,
    pub(crate) is_fixed: bool,
}
