pub(crate) mod history;
pub(crate) mod route;

pub(crate) use history::Navigator;
pub(crate) use route::Route;

/// Locale and tab segments of a tab route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocaleTab {
    pub(crate) locale: String,
    pub(crate) tabbar: String,
}

/// Extract the locale and tab of `route`, if it names a tab page.
pub(crate) fn resolve_locale(route: &Route) -> Option<LocaleTab> {
    match route {
        Route::Tab { locale, tab } => Some(LocaleTab {
            locale: locale.clone(),
            tabbar: tab.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tab_route_then_locale_and_tab_are_resolved() {
        let route = Route::Tab {
            locale: String::from("en"),
            tab: String::from("vault"),
        };

        assert_eq!(
            resolve_locale(&route),
            Some(LocaleTab {
                locale: String::from("en"),
                tabbar: String::from("vault"),
            })
        );
        assert_eq!(resolve_locale(&Route::Login), None);
    }
}
