//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
pub use config::Config;
pub use error::{OptionError, OptionResult};

use self::{args::ShoplistArgs, config::style::Styles};
use crate::{
    app::{snapshot::MemorySnapshotStore, App, AppConfigFields},
    canvas::Painter,
    constants::*,
};

macro_rules! is_flag_enabled {
    ($flag_name:ident, $arg:expr, $config:expr) => {
        if $arg.$flag_name {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Returns the config path to use. If `override_config_path` is specified,
/// then we will use that. If not, then return the default config path, which
/// is `<config dir>/shoplist/shoplist.toml` if the platform has a config
/// directory.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_DIR);
        path.push(DEFAULT_CONFIG_FILE_NAME);
        path
    })
}

/// Get the config at `config_path`. If there is no config file at the
/// specified path, it will try to create a new file with the default
/// settings, unless `no_write` is set.
pub fn get_or_create_config(config_path: Option<&Path>, no_write: bool) -> OptionResult<Config> {
    let Some(path) = config_path else {
        // Don't write, the config path was somehow None...
        return Ok(Config::default());
    };

    if path.is_dir() {
        return Err(OptionError::arg(format!(
            "'{}' is a directory, expected a config file.",
            path.display()
        )));
    }

    if path.exists() {
        let config_string = fs::read_to_string(path)?;
        Ok(toml_edit::de::from_str(&config_string)?)
    } else {
        if !no_write {
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }

            fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
            crate::info!("Wrote a default config file to {}.", path.display());
        }

        Ok(Config::default())
    }
}

/// Builds the [`App`] and the [`Painter`] from the arguments and config.
pub fn init_app(args: &ShoplistArgs, config: &Config) -> anyhow::Result<(App, Painter)> {
    let styles = Styles::new(args, config)?;

    let app_config_fields = AppConfigFields {
        disable_click: is_flag_enabled!(disable_click, args.general, config),
    };

    let app = App::new(app_config_fields, Box::<MemorySnapshotStore>::default())
        .context("Unable to restore the shopping list.")?;

    Ok((app, Painter::init(styles)))
}
