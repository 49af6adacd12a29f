use crate::navigation::Route;
use crate::navigation::route::{LOGIN_PATH, tab_path};
use crate::widgets::menu::catalog::TabCatalog;

/// Decision taken for a route before it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteGuard {
    /// Render the route.
    Allow,
    /// Replace the current history entry with the given path.
    Redirect(String),
}

/// Classify `route` given the session state.
pub(crate) fn route_guard(
    route: &Route,
    signed_in: bool,
    locale: &str,
    catalog: &TabCatalog,
) -> RouteGuard {
    use RouteGuard::*;

    let home = || tab_path(locale, catalog.default_key());
    let entry = || {
        if signed_in {
            home()
        } else {
            String::from(LOGIN_PATH)
        }
    };

    match route {
        Route::Login | Route::Register if signed_in => Redirect(home()),
        Route::Login | Route::Register => Allow,
        Route::Tab { .. } if signed_in => Allow,
        Route::Tab { .. } => Redirect(String::from(LOGIN_PATH)),
        Route::Locale { locale } if signed_in => {
            Redirect(tab_path(locale, catalog.default_key()))
        },
        Route::Locale { .. } | Route::Root | Route::NotFound { .. } => {
            Redirect(entry())
        },
    }
}
