use iced::widget::{Space, Stack, column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::navigation::Route;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::account::view::account_form;
use crate::widgets::login::view::login_form;
use crate::widgets::menu::MenuEvent;
use crate::widgets::menu::view::nav_bar::NAV_BAR_HEIGHT;
use crate::widgets::menu::view::{brand_bar, nav_bar, tab_header};
use crate::widgets::register::view as register_view;
use crate::widgets::toast::view::toast_stack;

const ACCOUNT_TAB: &str = "settings";
const CONTENT_PADDING_X: f32 = 24.0;
const CONTENT_PADDING_BOTTOM: f32 = 32.0;
const PLACEHOLDER_TEXT: &str = "Nothing stored here yet.";

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let screen = if !app.session_ready {
        view_loading(app, theme_props)
    } else {
        match Route::parse(
            app.navigator.current_path(),
            app.widgets.menu.catalog(),
        ) {
            Route::Login => login_form::view(login_form::LoginFormProps {
                vm: app.widgets.login.vm(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(AppEvent::LoginUi),
            Route::Register => {
                register_view::view(register_view::RegisterProps {
                    vm: app.widgets.register.vm(),
                    theme: theme_props,
                    fonts: &app.fonts,
                })
                .map(AppEvent::RegisterUi)
            },
            Route::Tab { .. } if app.widgets.menu.is_mounted() => {
                view_shell(app, theme_props)
            },
            _ => view_loading(app, theme_props),
        }
    };

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![screen];

    // Toast overlay
    if app.widgets.toast.has_toasts() {
        layers.push(
            toast_stack::view(toast_stack::ToastStackProps {
                vm: app.widgets.toast.vm(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(AppEvent::ToastUi),
        );
    }

    let background = theme_props.palette().background;
    container(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(background.into()),
        ..Default::default()
    })
    .into()
}

fn view_loading<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let dim = theme_props.palette().dim_foreground;
    container(
        text("Loading…")
            .size(app.fonts.ui.size)
            .font(app.fonts.ui.font_type)
            .style(move |_| text::Style { color: Some(dim) }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Render the signed-in shell: brand row, tab bar, header and tab content.
/// Once the menu reports a fixed layout the tab bar is drawn over the top
/// of the scroll area. The scroll area stays the base layer in both states
/// so its offset survives the switch.
fn view_shell<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let vm = app.widgets.menu.vm();

    let brand = brand_bar::view(brand_bar::BrandBarProps {
        email: app.user_email(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::MenuUi);
    let nav = || {
        nav_bar::view(nav_bar::NavBarProps {
            vm,
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(AppEvent::MenuUi)
    };
    let header = tab_header::view(tab_header::TabHeaderProps {
        vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::MenuUi);

    // Keep the scroll content height stable when the bar is pinned.
    let (inline_nav, pinned_nav): (
        Element<'a, AppEvent, Theme, iced::Renderer>,
        Element<'a, AppEvent, Theme, iced::Renderer>,
    ) = if vm.is_fixed {
        (
            Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(NAV_BAR_HEIGHT))
                .into(),
            column![nav()].width(Length::Fill).into(),
        )
    } else {
        (nav(), Space::new().into())
    };

    let tab_content = view_tab_content(app, theme_props);
    let body =
        column![brand, inline_nav, header, tab_content].width(Length::Fill);
    let content = scrollable(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| {
            AppEvent::MenuUi(MenuEvent::Scrolled {
                offset_y: viewport.absolute_offset().y,
            })
        });

    Stack::with_children(vec![content.into(), pinned_nav])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_tab_content<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let content = if app.widgets.menu.url_tab() == Some(ACCOUNT_TAB) {
        account_form::view(account_form::AccountFormProps {
            vm: app.widgets.account.vm(),
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(AppEvent::AccountUi)
    } else {
        let dim = theme_props.palette().dim_foreground;
        text(PLACEHOLDER_TEXT)
            .size(app.fonts.ui.size)
            .font(app.fonts.ui.font_type)
            .style(move |_| text::Style { color: Some(dim) })
            .into()
    };

    container(content)
        .width(Length::Fill)
        .padding(iced::Padding {
            top: 0.0,
            right: CONTENT_PADDING_X,
            bottom: CONTENT_PADDING_BOTTOM,
            left: CONTENT_PADDING_X,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use iced::advanced::widget::Tree;
    use pase_session::User;
    use uuid::Uuid;

    use super::*;
    use crate::config::AppConfig;
    use crate::routers;

    fn signed_in_app() -> App {
        let (mut app, _) = App::new(AppConfig::default());
        let user = User {
            id: Uuid::from_u128(1),
            email: Some(String::from("ada@example.com")),
        };
        let _ = routers::navigation::session_restored(&mut app, Ok(Some(user)));
        app
    }

    fn shell_tree(app: &App) -> Tree {
        let element = view_shell(app, ThemeProps::new(&app.theme));
        Tree::new(&element)
    }

    #[test]
    fn given_shell_when_tab_bar_pins_then_scroll_area_keeps_its_state() {
        let mut app = signed_in_app();
        let mut tree = shell_tree(&app);
        let unpinned = tree.children.iter().map(|c| c.tag).collect::<Vec<_>>();

        let _ = routers::menu::route_event(
            &mut app,
            MenuEvent::Scrolled { offset_y: 120.0 },
        );
        assert!(app.widgets.menu.vm().is_fixed);
        let pinned = shell_tree(&app);

        assert_eq!(tree.tag, pinned.tag);
        assert_eq!(tree.children.len(), pinned.children.len());
        assert_eq!(unpinned[0], pinned.children[0].tag);

        let element = view_shell(&app, ThemeProps::new(&app.theme));
        tree.diff(&element);
        assert_eq!(tree.children[0].tag, unpinned[0]);
    }
}
