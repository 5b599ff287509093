//! The pre-defined themes.

use tui::{
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use super::Styles;

/// Convert a [`tui::style::Color`] into a [`tui::style::Style`] with the color as the foreground.
macro_rules! color {
    ($value:expr) => {
        tui::style::Style::new().fg($value)
    };
}

impl Styles {
    pub(crate) fn default_style() -> Self {
        const HIGHLIGHT_COLOUR: Color = Color::LightBlue;
        const TEXT_COLOUR: Color = Color::Gray;

        Self {
            title_style: color!(Color::LightCyan).add_modifier(Modifier::BOLD),
            text_style: color!(TEXT_COLOUR),
            selected_text_style: color!(Color::Black).bg(HIGHLIGHT_COLOUR),
            empty_text_style: color!(Color::DarkGray),
            border_style: color!(TEXT_COLOUR),
            highlighted_border_style: color!(HIGHLIGHT_COLOUR),
            button_style: color!(Color::LightGreen).add_modifier(Modifier::BOLD),
            border_type: BorderType::Plain,
        }
    }

    pub(crate) fn default_light_mode() -> Self {
        Self {
            title_style: color!(Color::Blue).add_modifier(Modifier::BOLD),
            text_style: color!(Color::Black),
            selected_text_style: color!(Color::White).bg(Color::LightBlue),
            empty_text_style: color!(Color::Gray),
            border_style: color!(Color::Black),
            highlighted_border_style: color!(Color::Blue),
            button_style: Style::new()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            ..Self::default_style()
        }
    }
}
