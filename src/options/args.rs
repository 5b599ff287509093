// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "shoplist [OPTIONS]";

/// The arguments for shoplist.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct ShoplistArgs {
    #[command(flatten)]
    pub general: GeneralArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub other: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path, unless \
                    --no_write is set."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        help = "Disables mouse clicks.",
        long_help = "Disables mouse clicks from interacting with the list, the input, and the add button."
    )]
    pub disable_click: bool,

    #[arg(
        long,
        help = "Disables writing to the config file.",
        long_help = "Disables writing a default config file if one does not exist."
    )]
    pub no_write: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Style Options", rename_all = "snake_case")]
pub struct StyleArgs {
    #[arg(
        long,
        value_name = "SCHEME",
        value_parser = ["default", "default-light"],
        hide_possible_values = true,
        help = "Use a color scheme, use --help for info on the colors. \
                [possible values: default, default-light]",
        long_help = indoc! {
            "Use a pre-defined color scheme. Currently supported values are:
            - default
            - default-light (default but adjusted for lighter backgrounds)"
        }
    )]
    pub theme: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`ShoplistArgs`].
pub fn get_args() -> ShoplistArgs {
    ShoplistArgs::parse()
}

/// Returns an [`Command`] based off of [`ShoplistArgs`].
#[allow(dead_code)]
pub fn build_cmd() -> Command {
    ShoplistArgs::command()
}
