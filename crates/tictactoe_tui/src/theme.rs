//! Light/dark theme. A presentation concern with no effect on the game.

use ratatui::style::Color;
use serde::Deserialize;
use tracing::instrument;

/// Visual theme of the front end.
///
/// Defaults to [`Theme::Light`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    #[display("light")]
    Light,
    /// Dark background, light text.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Toggles between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the toggle button. Names the mode the button switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }

    /// Accessible description of the toggle button.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Colors used to draw this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::Rgb(255, 255, 255),
                surface: Color::Rgb(248, 249, 250),
                text: Color::Rgb(40, 44, 52),
                text_secondary: Color::Rgb(108, 117, 125),
                border: Color::Rgb(206, 212, 218),
                accent: Color::Rgb(0, 123, 255),
                accent_text: Color::Rgb(255, 255, 255),
                mark_x: MARK_X,
                mark_o: MARK_O,
            },
            Self::Dark => Palette {
                background: Color::Rgb(26, 26, 26),
                surface: Color::Rgb(45, 45, 45),
                text: Color::Rgb(255, 255, 255),
                text_secondary: Color::Rgb(176, 176, 176),
                border: Color::Rgb(64, 64, 64),
                accent: Color::Rgb(0, 86, 179),
                accent_text: Color::Rgb(255, 255, 255),
                mark_x: MARK_X,
                mark_o: MARK_O,
            },
        }
    }
}

const MARK_X: Color = Color::Rgb(0xE8, 0x7A, 0x41);
const MARK_O: Color = Color::Rgb(0x00, 0x7B, 0xFF);

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Cell background.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (subtitle, draw message, hints).
    pub text_secondary: Color,
    /// Cell borders.
    pub border: Color,
    /// Buttons, cursor and winner message.
    pub accent: Color,
    /// Text drawn on the accent color.
    pub accent_text: Color,
    /// Color of X marks.
    pub mark_x: Color,
    /// Color of O marks.
    pub mark_o: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_labels_name_the_target_mode() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::Light.toggle_hint(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
        assert_eq!(Theme::Dark.toggle_hint(), "Switch to light mode");
    }

    #[test]
    fn test_marks_share_colors_across_themes() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(light.mark_x, dark.mark_x);
        assert_eq!(light.mark_o, dark.mark_o);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
