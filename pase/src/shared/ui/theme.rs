use iced::theme::Palette;
use iced::{Color, Theme};

/// Colors used by the application chrome and forms.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) border: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) accent_foreground: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) overlay: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xF7, 0xF7, 0xF8),
            surface: Color::WHITE,
            border: Color::from_rgb8(234, 234, 234),
            foreground: Color::from_rgb8(0x1F, 0x23, 0x28),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_foreground: Color::WHITE,
            success: Color::from_rgb8(0x16, 0xA3, 0x4A),
            warning: Color::from_rgb8(0xD9, 0x77, 0x06),
            danger: Color::from_rgb8(0xDC, 0x26, 0x26),
            overlay: Color::from_rgb8(0xEE, 0xEF, 0xF2),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    palette: ColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("pase-light"),
            palette: ColorPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed through App -> Widget view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a ColorPalette {
        self.theme.palette()
    }
}
