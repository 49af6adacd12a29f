#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use pase_session::User;

use crate::config::AppConfig;
use crate::navigation::Navigator;
use crate::services::Services;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::widgets::account::{
    AccountCommand, AccountEffect, AccountEvent, AccountWidget,
};
use crate::widgets::login::{LoginEffect, LoginEvent, LoginWidget};
use crate::widgets::menu::catalog::TabCatalog;
use crate::widgets::menu::{MenuCommand, MenuEffect, MenuEvent, MenuWidget};
use crate::widgets::register::{RegisterEffect, RegisterEvent, RegisterWidget};
use crate::widgets::toast::{ToastCommand, ToastEvent, ToastWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 720.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Session
    SessionRestored(Result<Option<User>, String>),
    SessionChanged(Option<User>),
    // Navigation
    Navigate { path: String },
    HistoryBack,
    HistoryForward,
    // Menu widget
    MenuUi(MenuEvent),
    MenuEffect(MenuEffect),
    MenuCommand(MenuCommand),
    // Login widget
    LoginUi(LoginEvent),
    LoginEffect(LoginEffect),
    // Register widget
    RegisterUi(RegisterEvent),
    RegisterEffect(RegisterEffect),
    // Account widget
    AccountUi(AccountEvent),
    AccountEffect(AccountEffect),
    AccountCommand(AccountCommand),
    // Toast widget
    ToastUi(ToastEvent),
    ToastCommand(ToastCommand),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) menu: MenuWidget,
    pub(crate) login: LoginWidget,
    pub(crate) register: RegisterWidget,
    pub(crate) account: AccountWidget,
    pub(crate) toast: ToastWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) services: Services,
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) navigator: Navigator,
    /// User of the current session, `None` when signed out.
    pub(crate) session: Option<User>,
    /// Whether the startup session lookup has finished.
    pub(crate) session_ready: bool,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the session restore task.
    pub(crate) fn new(config: AppConfig) -> (Self, Task<AppEvent>) {
        let services = Services::from_config(&config);
        let widgets = Widgets {
            menu: MenuWidget::new(TabCatalog::builtin()),
            login: LoginWidget::new(),
            register: RegisterWidget::new(),
            account: AccountWidget::new(),
            toast: ToastWidget::new(),
        };

        let session = services.session.clone();
        let restore = Task::perform(
            async move {
                session.current_user().await.map_err(|err| err.to_string())
            },
            AppEvent::SessionRestored,
        );

        let app = App {
            config,
            services,
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            navigator: Navigator::new("/"),
            session: None,
            session_ready: false,
            widgets,
        };

        (app, restore)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Ultimo Pase")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Email of the signed-in user, if known.
    pub(crate) fn user_email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|user| user.email.as_deref())
    }
}
