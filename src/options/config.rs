pub mod flags;
pub mod style;

use serde::{Deserialize, Serialize};

use self::{flags::FlagConfig, style::StyleConfig};

/// The config file. Every section is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
    pub(crate) styles: Option<StyleConfig>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::CONFIG_TEXT;

    #[test]
    fn empty_config() {
        let generated: Config = toml_edit::de::from_str("").unwrap();
        assert_eq!(generated, Config::default());
    }

    /// The default config file we write out should parse, and should not
    /// change anything.
    #[test]
    fn default_config_text_parses() {
        let generated: Config = toml_edit::de::from_str(CONFIG_TEXT).unwrap();
        assert!(generated.flags.is_none());
        assert!(generated.styles.is_none());
    }

    #[test]
    fn full_config() {
        let config = r##"
            [flags]
            disable_click = true

            [styles]
            theme = "default"
            title = { color = "cyan", bold = true }
            text = "gray"
            selected_text = { color = "black", bg_color = "light blue" }
            empty_text = "dark gray"
            border_color = "#888"
            selected_border_color = "light blue"
            button_colour = "light green"
        "##;

        let generated: Config = toml_edit::de::from_str(config).unwrap();
        let flags = generated.flags.unwrap();
        assert_eq!(flags.disable_click, Some(true));
        assert!(generated.styles.unwrap().button_color.is_some());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let config = r#"
            [processes]
            columns = ["cpu%"]
        "#;

        toml_edit::de::from_str::<Config>(config).expect_err("Should error out!");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let config = r#"
            [styles]
            background = "red"
        "#;

        toml_edit::de::from_str::<Config>(config).expect_err("Should error out!");
    }

    #[test]
    fn mismatched_type_is_rejected() {
        let config = r#"
            [flags]
            disable_click = "yes"
        "#;

        toml_edit::de::from_str::<Config>(config).expect_err("Should error out!");
    }
}
