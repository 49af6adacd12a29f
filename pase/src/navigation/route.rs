use crate::widgets::menu::catalog::TabCatalog;

/// First path segments that are routes of their own, never locales.
pub(crate) const RESERVED_SEGMENTS: [&str; 2] = ["login", "register"];

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const REGISTER_PATH: &str = "/register";

/// A parsed application path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Root,
    Login,
    Register,
    /// `/{locale}` without a tab.
    Locale { locale: String },
    /// `/{locale}/{tab}` with `tab` being a catalog key.
    Tab { locale: String, tab: String },
    NotFound { path: String },
}

impl Route {
    /// Parse `path`, ignoring any query string or fragment.
    pub(crate) fn parse(path: &str, catalog: &TabCatalog) -> Self {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            [locale] if !RESERVED_SEGMENTS.contains(locale) => Route::Locale {
                locale: (*locale).to_string(),
            },
            [locale, tab] if !RESERVED_SEGMENTS.contains(locale) => {
                match catalog.find(tab) {
                    Some(entry) => Route::Tab {
                        locale: (*locale).to_string(),
                        tab: entry.key().to_string(),
                    },
                    None => Route::NotFound {
                        path: path.to_string(),
                    },
                }
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path of the route.
    pub(crate) fn path(&self) -> String {
        match self {
            Route::Root => String::from("/"),
            Route::Login => String::from(LOGIN_PATH),
            Route::Register => String::from(REGISTER_PATH),
            Route::Locale { locale } => format!("/{locale}"),
            Route::Tab { locale, tab } => format!("/{locale}/{tab}"),
            Route::NotFound { path } => path.clone(),
        }
    }
}

/// Path of the tab page `tab` under `locale`.
pub(crate) fn tab_path(locale: &str, tab: &str) -> String {
    format!("/{locale}/{tab}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        Route::parse(path, &TabCatalog::builtin())
    }

    #[test]
    fn given_auth_paths_then_auth_routes_are_parsed() {
        assert_eq!(parse("/"), Route::Root);
        assert_eq!(parse(""), Route::Root);
        assert_eq!(parse("/login"), Route::Login);
        assert_eq!(parse("/register/"), Route::Register);
    }

    #[test]
    fn given_locale_and_tab_then_tab_key_is_lowercased() {
        assert_eq!(
            parse("/en/Vault"),
            Route::Tab {
                locale: String::from("en"),
                tab: String::from("vault"),
            }
        );
    }

    #[test]
    fn given_query_and_fragment_then_they_are_ignored() {
        assert_eq!(
            parse("/u/settings?code=abc#top"),
            Route::Tab {
                locale: String::from("u"),
                tab: String::from("settings"),
            }
        );
    }

    #[test]
    fn given_locale_only_then_locale_route_is_parsed() {
        assert_eq!(
            parse("/u"),
            Route::Locale {
                locale: String::from("u"),
            }
        );
    }

    #[test]
    fn given_unknown_tab_or_deep_path_then_not_found() {
        assert!(matches!(parse("/en/billing"), Route::NotFound { .. }));
        assert!(matches!(parse("/en/vault/items"), Route::NotFound { .. }));
        assert!(matches!(parse("/login/vault"), Route::NotFound { .. }));
    }

    #[test]
    fn given_routes_then_paths_are_canonical() {
        assert_eq!(parse("/EN/Overview").path(), "/EN/overview");
        assert_eq!(Route::Login.path(), LOGIN_PATH);
        assert_eq!(tab_path("en", "vault"), "/en/vault");
    }
}
