use super::catalog::{TabCatalog, tab_key};

/// Scroll offset past which the navigation bar pins to the window top.
pub(crate) const FIXED_SCROLL_THRESHOLD: f32 = 60.0;

/// Redirect progress of the navigation controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum NavPhase {
    /// The active tab follows the URL.
    #[default]
    Idle,
    /// A user-selected tab awaits the URL to catch up.
    Redirecting { target: String },
}

/// Owned state of the navigation controller.
#[derive(Debug)]
pub(crate) struct MenuState {
    catalog: TabCatalog,
    mounted: bool,
    locale: String,
    url_tab: String,
    active_tab: String,
    is_fixed: bool,
    phase: NavPhase,
}

impl MenuState {
    pub(crate) fn new(catalog: TabCatalog) -> Self {
        Self {
            catalog,
            mounted: false,
            locale: String::new(),
            url_tab: String::new(),
            active_tab: String::new(),
            is_fixed: false,
            phase: NavPhase::Idle,
        }
    }

    pub(crate) fn catalog(&self) -> &TabCatalog {
        &self.catalog
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn url_tab(&self) -> &str {
        &self.url_tab
    }

    pub(crate) fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    pub(crate) fn phase(&self) -> &NavPhase {
        &self.phase
    }

    /// Start a fresh cycle from the URL.
    pub(crate) fn mount(&mut self, locale: &str, url_tab: &str) {
        self.mounted = true;
        self.locale = locale.to_string();
        self.url_tab = tab_key(url_tab);
        self.active_tab = self.url_tab.clone();
        self.is_fixed = false;
        self.phase = NavPhase::Idle;
    }

    /// Drop the cycle; later events no longer touch the state.
    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.is_fixed = false;
        self.phase = NavPhase::Idle;
    }

    /// Adopt the URL as the source of truth. Returns `true` when the URL tab
    /// differs from the previously seen one.
    pub(crate) fn sync_url(&mut self, locale: &str, url_tab: &str) -> bool {
        let url_tab = tab_key(url_tab);
        let url_changed = self.url_tab != url_tab;

        self.locale = locale.to_string();
        self.url_tab = url_tab;
        if self.active_tab != self.url_tab {
            self.active_tab = self.url_tab.clone();
        }
        self.phase = NavPhase::Idle;

        url_changed
    }

    /// Record a user tab selection. Returns `true` when the active tab
    /// changed.
    pub(crate) fn select(&mut self, tab: &str) -> bool {
        let tab = tab_key(tab);
        if self.active_tab == tab {
            return false;
        }

        self.active_tab = tab;
        true
    }

    /// Path the router should move to, when the active tab and the URL
    /// disagree.
    pub(crate) fn redirect_target(&self) -> Option<String> {
        if self.url_tab == self.active_tab {
            return None;
        }
        Some(format!("/{}/{}", self.locale, self.active_tab))
    }

    pub(crate) fn set_phase(&mut self, phase: NavPhase) {
        self.phase = phase;
    }

    /// Recompute the pinned flag from a scroll offset. Returns `true` only
    /// when the flag flipped.
    pub(crate) fn apply_scroll(&mut self, offset_y: f32) -> bool {
        let should_fix = offset_y > FIXED_SCROLL_THRESHOLD;
        if should_fix == self.is_fixed {
            return false;
        }

        self.is_fixed = should_fix;
        true
    }
}
