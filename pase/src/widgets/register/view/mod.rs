pub(crate) mod register_form;
pub(crate) mod verify;

use iced::Element;

use super::event::RegisterEvent;
use super::model::{RegisterStage, RegisterViewModel};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

/// Props for rendering the registration screens.
#[derive(Debug, Clone)]
pub(crate) struct RegisterProps<'a> {
    pub(crate) vm: RegisterViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the form or the confirmation notice, depending on the stage.
pub(crate) fn view<'a>(props: RegisterProps<'a>) -> Element<'a, RegisterEvent> {
    match props.vm.stage {
        RegisterStage::Form => register_form::view(props),
        RegisterStage::AwaitingConfirmation { email } => {
            verify::view(email, props.theme, props.fonts)
        },
    }
}
