//! Config file location.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the user config root.
const APP_DIR: &str = "tmdb";

/// Resolves the config file path.
///
/// `--dir` wins; otherwise `$XDG_CONFIG_HOME/tmdb/config.toml`, falling back
/// to `~/.config/tmdb/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable and no
/// `dir` was given.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE));
    }
    default_config_path(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Default config path from the given `XDG_CONFIG_HOME` and `HOME` values.
///
/// A relative or empty `XDG_CONFIG_HOME` is ignored.
fn default_config_path(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    let config_root = xdg_config_home
        .map(PathBuf::from)
        .filter(|root| root.is_absolute())
        .or_else(|| {
            home.filter(|home| !home.is_empty())
                .map(|home| Path::new(&home).join(".config"))
        })
        .context("cannot locate the config directory: set HOME or pass --dir")?;

    Ok(config_root.join(APP_DIR).join(CONFIG_FILE))
}
