// How long the main loop waits for an event before checking for termination.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 200;

// Text on the screen.
pub const APP_TITLE: &str = "Shopping List";
pub const INPUT_LABEL: &str = "new article";
pub const ADD_BUTTON_ICON: &str = "+";
pub const ADD_BUTTON_LABEL: &str = "add new Item";
pub const EMPTY_LIST_MESSAGE: &str =
    "Your Shopping list is empty. Add a new article with the button below.";
pub const INPUT_HINT: &str = "enter/[+]: add new Item · tab: list · esc: quit";
pub const LIST_HINT: &str = "enter/click: remove · tab: input · q: quit";

// Layout.
pub const APP_BAR_HEIGHT: u16 = 1;
pub const INPUT_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const ADD_BUTTON_WIDTH: u16 = 5;
pub const ADD_BUTTON_HEIGHT: u16 = 3;

// Config and config path constants.
pub const DEFAULT_CONFIG_DIR: &str = "shoplist";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "shoplist.toml";

/// The default config file, written out if one does not exist yet. Everything
/// is commented out so it doesn't change any defaults.
pub const CONFIG_TEXT: &str = r##"# This is a default config file for shoplist. All of the settings are commented
# out by default; if you wish to change them uncomment and modify as you see
# fit.

# These options represent settings that affect how shoplist functions.
# If a setting here corresponds to command-line option, then the flag will
# temporarily override the setting.
#[flags]
# Disables mouse clicks.
#disable_click = false

# These options represent colour values for various parts of shoplist. Colours
# can be a named ANSI colour, a hex colour like "#12ab3c", or an RGB colour
# like "255, 0, 155". Text styles can also be a table such as
# { color = "black", bg_color = "light blue", bold = true }.
#[styles]
# A built-in theme, either "default" or "default-light".
#theme = "default"
# The app bar title.
#title = { color = "light cyan", bold = true }
# Items and the text input.
#text = "gray"
# The selected item and the text cursor.
#selected_text = { color = "black", bg_color = "light blue" }
# The empty list message and the key hints.
#empty_text = "dark gray"
# Borders of unfocused widgets.
#border_color = "gray"
# Borders of the focused widget.
#selected_border_color = "light blue"
# The add button.
#button_color = "light green"
"##;
