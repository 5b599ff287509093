use concat_string::concat_string;
use tui::style::{Color, Modifier, Style};
use unicode_segmentation::UnicodeSegmentation;

use super::{ColorStr, TextStyleConfig};
use crate::options::{OptionError, OptionResult};

/// Convert a hex string to a colour.
pub(super) fn try_hex_to_colour(hex: &str) -> Result<Color, String> {
    fn hex_component_to_int(hex: &str, first: &str, second: &str) -> Result<u8, String> {
        u8::from_str_radix(&concat_string!(first, second), 16)
            .map_err(|_| format!("'{hex}' is an invalid hex color, could not decode."))
    }

    fn invalid_hex_format(hex: &str) -> String {
        format!(
            "'{hex}' is an invalid hex color. It must be either a 7 character hex string of the form '#12ab3c' or a 3 character hex string of the form '#1a2'.",
        )
    }

    if !hex.starts_with('#') {
        return Err(invalid_hex_format(hex));
    }

    let components: Vec<&str> = hex.graphemes(true).collect();
    if components.len() == 7 {
        // A 6-long hex.
        let r = hex_component_to_int(hex, components[1], components[2])?;
        let g = hex_component_to_int(hex, components[3], components[4])?;
        let b = hex_component_to_int(hex, components[5], components[6])?;

        Ok(Color::Rgb(r, g, b))
    } else if components.len() == 4 {
        // A 3-long hex.
        let r = hex_component_to_int(hex, components[1], components[1])?;
        let g = hex_component_to_int(hex, components[2], components[2])?;
        let b = hex_component_to_int(hex, components[3], components[3])?;

        Ok(Color::Rgb(r, g, b))
    } else {
        Err(invalid_hex_format(hex))
    }
}

pub fn str_to_colour(input_val: &str) -> Result<Color, String> {
    if input_val.len() > 1 {
        if input_val.starts_with('#') {
            try_hex_to_colour(input_val)
        } else if input_val.contains(',') {
            convert_rgb_to_color(input_val)
        } else {
            convert_name_to_colour(input_val)
        }
    } else {
        Err(format!("Value '{input_val}' is not valid.",))
    }
}

fn convert_rgb_to_color(rgb_str: &str) -> Result<Color, String> {
    let rgb_list = rgb_str.split(',').collect::<Vec<&str>>();
    if rgb_list.len() != 3 {
        return Err(format!(
            "Value '{rgb_str}' is an invalid RGB colour. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        ));
    }

    let rgb = rgb_list
        .iter()
        .filter_map(|val| val.trim().parse::<u8>().ok())
        .collect::<Vec<_>>();

    if rgb.len() == 3 {
        Ok(Color::Rgb(rgb[0], rgb[1], rgb[2]))
    } else {
        Err(format!(
            "Value '{rgb_str}' contained invalid RGB values. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        ))
    }
}

fn convert_name_to_colour(color_name: &str) -> Result<Color, String> {
    match color_name.to_lowercase().trim() {
        "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark gray" | "dark grey" => Ok(Color::DarkGray),
        "lightred" | "light red" => Ok(Color::LightRed),
        "lightgreen" | "light green" => Ok(Color::LightGreen),
        "lightyellow" | "light yellow" => Ok(Color::LightYellow),
        "lightblue" | "light blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(format!(
            "'{color_name}' is an invalid named color. Named ANSI colors (e.g. 'light blue'), \
            hex colors, or RGB color codes are valid."
        )),
    }
}

fn style_error(field: &str, err: String) -> OptionError {
    OptionError::config(format!(
        "Please update 'styles.{field}' in your config file. {err}"
    ))
}

/// Applies a configured colour to the foreground of `style`, if one is set.
pub(super) fn set_colour(style: &mut Style, colour: Option<&ColorStr>, field: &str) -> OptionResult<()> {
    if let Some(colour) = colour {
        *style = style.fg(str_to_colour(&colour.0).map_err(|err| style_error(field, err))?);
    }

    Ok(())
}

/// Applies a configured text style on top of `style`, if one is set.
pub(super) fn set_style(
    style: &mut Style, config: Option<&TextStyleConfig>, field: &str,
) -> OptionResult<()> {
    match config {
        None => {}
        Some(TextStyleConfig::Colour(colour)) => set_colour(style, Some(colour), field)?,
        Some(TextStyleConfig::TextStyle {
            color,
            bg_color,
            bold,
            italics,
        }) => {
            set_colour(style, color.as_ref(), field)?;

            if let Some(bg) = bg_color {
                *style = style.bg(str_to_colour(&bg.0).map_err(|err| style_error(field, err))?);
            }

            if let Some(bold) = bold {
                *style = if *bold {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style.remove_modifier(Modifier::BOLD)
                };
            }

            if let Some(italics) = italics {
                *style = if *italics {
                    style.add_modifier(Modifier::ITALIC)
                } else {
                    style.remove_modifier(Modifier::ITALIC)
                };
            }
        }
    }

    Ok(())
}
