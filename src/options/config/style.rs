//! Config options around styling.

mod themes;
mod utils;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tui::{style::Style, widgets::BorderType};
use utils::{set_colour, set_style};

use super::Config;
use crate::options::{args::ShoplistArgs, OptionError, OptionResult};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct ColorStr(Cow<'static, str>);

/// A style for text.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) enum TextStyleConfig {
    Colour(ColorStr),
    TextStyle {
        /// A built-in ANSI colour, RGB hex, or RGB colour code.
        #[serde(alias = "colour")]
        color: Option<ColorStr>,

        /// A built-in ANSI colour, RGB hex, or RGB colour code.
        #[serde(alias = "bg_colour")]
        bg_color: Option<ColorStr>,

        /// Whether to make this text bolded or not.
        bold: Option<bool>,

        /// Whether to make this text italicized or not.
        italics: Option<bool>,
    },
}

/// Style-related configs.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct StyleConfig {
    /// A built-in theme. A theme set in the command-line args is always
    /// prioritized over this one.
    pub(crate) theme: Option<Cow<'static, str>>,

    /// The app bar title.
    pub(crate) title: Option<TextStyleConfig>,

    /// Item and input text.
    pub(crate) text: Option<TextStyleConfig>,

    /// The selected item and the text cursor.
    pub(crate) selected_text: Option<TextStyleConfig>,

    /// The message shown when the list is empty, and the key hints.
    pub(crate) empty_text: Option<TextStyleConfig>,

    #[serde(alias = "border_colour")]
    pub(crate) border_color: Option<ColorStr>,

    #[serde(alias = "selected_border_colour")]
    pub(crate) selected_border_color: Option<ColorStr>,

    #[serde(alias = "button_colour")]
    pub(crate) button_color: Option<ColorStr>,
}

/// The actual internal representation of the configured styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    pub title_style: Style,
    pub text_style: Style,
    pub selected_text_style: Style,
    pub empty_text_style: Style,
    pub border_style: Style,
    pub highlighted_border_style: Style,
    pub button_style: Style,
    pub border_type: BorderType,
}

impl Default for Styles {
    fn default() -> Self {
        Self::default_style()
    }
}

impl Styles {
    pub fn new(args: &ShoplistArgs, config: &Config) -> anyhow::Result<Self> {
        let mut styles = match &args.style.theme {
            Some(theme) => Self::from_theme(theme)?,
            None => match config.styles.as_ref().and_then(|s| s.theme.as_ref()) {
                Some(theme) => Self::from_theme(theme)?,
                None => Self::default(),
            },
        };

        // Apply the rest of the styles from the config on top.
        if let Some(style) = &config.styles {
            styles.set_styles_from_config(style)?;
        }

        Ok(styles)
    }

    fn from_theme(theme: &str) -> anyhow::Result<Self> {
        let lower_case = theme.to_lowercase();
        match lower_case.as_str() {
            "default" => Ok(Self::default_style()),
            "default-light" => Ok(Self::default_light_mode()),
            _ => Err(
                OptionError::other(format!("'{theme}' is an invalid built-in color scheme."))
                    .into(),
            ),
        }
    }

    fn set_styles_from_config(&mut self, config: &StyleConfig) -> OptionResult<()> {
        set_style(&mut self.title_style, config.title.as_ref(), "title")?;
        set_style(&mut self.text_style, config.text.as_ref(), "text")?;
        set_style(
            &mut self.selected_text_style,
            config.selected_text.as_ref(),
            "selected_text",
        )?;
        set_style(
            &mut self.empty_text_style,
            config.empty_text.as_ref(),
            "empty_text",
        )?;

        set_colour(
            &mut self.border_style,
            config.border_color.as_ref(),
            "border_color",
        )?;
        set_colour(
            &mut self.highlighted_border_style,
            config.selected_border_color.as_ref(),
            "selected_border_color",
        )?;
        set_colour(
            &mut self.button_style,
            config.button_color.as_ref(),
            "button_color",
        )?;

        Ok(())
    }
}
