use iced::Task;

use super::command::MenuCommand;
use super::event::MenuEffect;
use super::state::{MenuState, NavPhase};
use crate::widgets::toast::Notice;

/// Outcome of a single reconciliation step.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Reconciliation {
    /// Whether the observable state was updated.
    pub(crate) changed: bool,
    pub(crate) effects: Vec<MenuEffect>,
}

impl Reconciliation {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: MenuEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Reduce a menu command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut MenuState,
    command: MenuCommand,
) -> Task<MenuEffect> {
    let Reconciliation { changed, effects } = reconcile(state, command);
    if changed {
        log::debug!(
            "menu state: active `{}`, fixed {}",
            state.active_tab(),
            state.is_fixed()
        );
    }
    Task::batch(effects.into_iter().map(Task::done))
}

/// Apply `command` to `state` and report what happened.
pub(crate) fn reconcile(
    state: &mut MenuState,
    command: MenuCommand,
) -> Reconciliation {
    match command {
        MenuCommand::Mount { locale, tab } => mount(state, &locale, &tab),
        MenuCommand::UrlChanged { locale, tab } => {
            url_changed(state, &locale, &tab)
        },
        MenuCommand::SelectTab { tab } => select_tab(state, &tab),
        MenuCommand::Scrolled { offset_y } => {
            if !state.is_mounted() {
                return Reconciliation::unchanged();
            }
            Reconciliation::changed(state.apply_scroll(offset_y))
        },
        MenuCommand::SignOut => {
            if !state.is_mounted() {
                return Reconciliation::unchanged();
            }
            Reconciliation::unchanged().with_effect(MenuEffect::SignOutRequested)
        },
        MenuCommand::SignOutFailed { message } => {
            if !state.is_mounted() {
                log::debug!("sign-out failure after unmount dropped: {message}");
                return Reconciliation::unchanged();
            }
            log::warn!("sign-out failed: {message}");
            Reconciliation::unchanged()
                .with_effect(MenuEffect::Notify(Notice::error(message)))
        },
        MenuCommand::Unmount => {
            if !state.is_mounted() {
                return Reconciliation::unchanged();
            }
            state.unmount();
            Reconciliation::changed(true)
        },
    }
}

fn mount(state: &mut MenuState, locale: &str, tab: &str) -> Reconciliation {
    if state.is_mounted() {
        return url_changed(state, locale, tab);
    }

    state.mount(locale, tab);
    Reconciliation::changed(true).with_effect(MenuEffect::TabShown {
        tab: state.url_tab().to_string(),
    })
}

fn url_changed(state: &mut MenuState, locale: &str, tab: &str) -> Reconciliation {
    if !state.is_mounted() {
        return Reconciliation::unchanged();
    }

    let active_before = state.active_tab().to_string();
    let phase_before = state.phase().clone();
    let url_tab_changed = state.sync_url(locale, tab);

    let changed = url_tab_changed
        || state.active_tab() != active_before
        || *state.phase() != phase_before;
    let reconciliation = Reconciliation::changed(changed);
    if !url_tab_changed {
        return reconciliation;
    }

    reconciliation.with_effect(MenuEffect::TabShown {
        tab: state.url_tab().to_string(),
    })
}

fn select_tab(state: &mut MenuState, tab: &str) -> Reconciliation {
    if !state.is_mounted() {
        return Reconciliation::unchanged();
    }

    let Some(key) = state.catalog().find(tab).map(|entry| entry.key().to_string())
    else {
        log::warn!("ignoring selection of unknown tab `{tab}`");
        return Reconciliation::unchanged();
    };

    if !state.select(&key) {
        return Reconciliation::unchanged();
    }

    match state.redirect_target() {
        Some(path) => {
            log::debug!("tab `{key}` selected, redirecting to {path}");
            state.set_phase(NavPhase::Redirecting { target: key });
            Reconciliation::changed(true)
                .with_effect(MenuEffect::Navigate { path })
        },
        None => {
            state.set_phase(NavPhase::Idle);
            Reconciliation::changed(true)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::menu::catalog::TabCatalog;
    use crate::widgets::toast::NoticeKind;

    fn mounted(tab: &str) -> MenuState {
        let mut state = MenuState::new(TabCatalog::builtin());
        reconcile(
            &mut state,
            MenuCommand::Mount {
                locale: String::from("en"),
                tab: String::from(tab),
            },
        );
        state
    }

    fn url(tab: &str) -> MenuCommand {
        MenuCommand::UrlChanged {
            locale: String::from("en"),
            tab: String::from(tab),
        }
    }

    fn select(tab: &str) -> MenuCommand {
        MenuCommand::SelectTab {
            tab: String::from(tab),
        }
    }

    fn navigations(effects: &[MenuEffect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                MenuEffect::Navigate { path } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn given_fresh_state_when_mounted_then_active_tab_comes_from_url() {
        let mut state = MenuState::new(TabCatalog::builtin());

        let result = reconcile(
            &mut state,
            MenuCommand::Mount {
                locale: String::from("en"),
                tab: String::from("settings"),
            },
        );

        assert!(result.changed);
        assert_eq!(state.active_tab(), "settings");
        assert_eq!(
            result.effects,
            vec![MenuEffect::TabShown {
                tab: String::from("settings")
            }]
        );
    }

    #[test]
    fn given_url_sequence_when_reconciled_then_active_follows_without_navigation()
     {
        let mut state = mounted("overview");

        for tab in ["vault", "settings", "overview", "vault"] {
            let result = reconcile(&mut state, url(tab));

            assert_eq!(state.active_tab(), state.url_tab());
            assert_eq!(state.active_tab(), tab);
            assert!(navigations(&result.effects).is_empty());
        }
    }

    #[test]
    fn given_url_tab_when_selected_again_then_no_navigation_is_emitted() {
        let mut state = mounted("overview");

        let result = reconcile(&mut state, select("overview"));

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(*state.phase(), NavPhase::Idle);
    }

    #[test]
    fn given_overview_url_when_vault_selected_then_one_navigation_to_vault() {
        let mut state = mounted("overview");

        let result = reconcile(&mut state, select("vault"));

        assert!(result.changed);
        assert_eq!(navigations(&result.effects), vec!["/en/vault"]);
        assert_eq!(result.effects.len(), 1);
        assert_eq!(state.active_tab(), "vault");
        assert_eq!(
            *state.phase(),
            NavPhase::Redirecting {
                target: String::from("vault")
            }
        );
    }

    #[test]
    fn given_pending_redirect_when_url_lands_then_phase_returns_to_idle() {
        let mut state = mounted("overview");
        reconcile(&mut state, select("vault"));

        let result = reconcile(&mut state, url("vault"));

        assert!(navigations(&result.effects).is_empty());
        assert_eq!(state.active_tab(), "vault");
        assert_eq!(*state.phase(), NavPhase::Idle);
    }

    #[test]
    fn given_mixed_case_selection_then_navigation_uses_lower_key() {
        let mut state = mounted("overview");

        let result = reconcile(&mut state, select("Settings"));

        assert_eq!(navigations(&result.effects), vec!["/en/settings"]);
    }

    #[test]
    fn given_unknown_tab_when_selected_then_state_is_untouched() {
        let mut state = mounted("overview");

        let result = reconcile(&mut state, select("billing"));

        assert_eq!(result, Reconciliation::default());
        assert_eq!(state.active_tab(), "overview");
    }

    #[test]
    fn given_rapid_switches_before_url_lands_then_url_tab_guards_redirects() {
        let mut state = mounted("overview");

        let first = reconcile(&mut state, select("vault"));
        let second = reconcile(&mut state, select("overview"));

        assert_eq!(navigations(&first.effects), vec!["/en/vault"]);
        assert!(second.changed);
        assert!(navigations(&second.effects).is_empty());
        assert_eq!(state.active_tab(), "overview");

        let landed = reconcile(&mut state, url("vault"));

        assert!(navigations(&landed.effects).is_empty());
        assert_eq!(state.active_tab(), "vault");
        assert_eq!(*state.phase(), NavPhase::Idle);
    }

    #[test]
    fn given_scroll_threshold_offsets_then_fixed_flag_matches() {
        let expectations = [
            (0.0, false),
            (59.0, false),
            (60.0, false),
            (61.0, true),
            (1000.0, true),
        ];

        for (offset_y, expected) in expectations {
            let mut state = mounted("overview");
            reconcile(&mut state, MenuCommand::Scrolled { offset_y });
            assert_eq!(state.is_fixed(), expected, "offset {offset_y}");
        }
    }

    #[test]
    fn given_scroll_sequence_then_state_flips_exactly_once() {
        let mut state = mounted("overview");

        let updates = [0.0, 10.0, 20.0, 61.0, 62.0, 63.0]
            .into_iter()
            .map(|offset_y| {
                reconcile(&mut state, MenuCommand::Scrolled { offset_y })
            })
            .filter(|result| result.changed)
            .count();

        assert_eq!(updates, 1);
        assert!(state.is_fixed());
    }

    #[test]
    fn given_sign_out_click_then_session_request_is_emitted() {
        let mut state = mounted("overview");

        let result = reconcile(&mut state, MenuCommand::SignOut);

        assert_eq!(result.effects, vec![MenuEffect::SignOutRequested]);
    }

    #[test]
    fn given_sign_out_failure_then_one_error_notice_and_no_navigation() {
        let mut state = mounted("overview");

        let result = reconcile(
            &mut state,
            MenuCommand::SignOutFailed {
                message: String::from("network down"),
            },
        );

        assert!(!result.changed);
        assert_eq!(result.effects.len(), 1);
        let MenuEffect::Notify(notice) = &result.effects[0] else {
            panic!("expected a notification");
        };
        assert_eq!(notice.text, "network down");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(navigations(&result.effects).is_empty());
    }

    #[test]
    fn given_unmounted_state_when_scrolled_then_nothing_changes() {
        let mut state = mounted("overview");
        reconcile(&mut state, MenuCommand::Unmount);

        for offset_y in [0.0, 100.0, 5.0, 500.0] {
            let result =
                reconcile(&mut state, MenuCommand::Scrolled { offset_y });
            assert_eq!(result, Reconciliation::default());
        }
        assert!(!state.is_fixed());
    }

    #[test]
    fn given_unmounted_state_then_selection_and_failures_are_ignored() {
        let mut state = mounted("overview");
        reconcile(&mut state, MenuCommand::Unmount);

        let selected = reconcile(&mut state, select("vault"));
        let failed = reconcile(
            &mut state,
            MenuCommand::SignOutFailed {
                message: String::from("late"),
            },
        );

        assert_eq!(selected, Reconciliation::default());
        assert_eq!(failed, Reconciliation::default());
    }

    #[test]
    fn given_remount_then_scroll_flag_starts_cleared() {
        let mut state = mounted("overview");
        reconcile(&mut state, MenuCommand::Scrolled { offset_y: 300.0 });
        reconcile(&mut state, MenuCommand::Unmount);

        reconcile(
            &mut state,
            MenuCommand::Mount {
                locale: String::from("en"),
                tab: String::from("vault"),
            },
        );

        assert!(!state.is_fixed());
        assert_eq!(state.active_tab(), "vault");
    }
}
