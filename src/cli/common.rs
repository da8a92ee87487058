//! Config resolution shared by the commands that read `site.toml`.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::Cli;
use crate::config::{
    UserConfig, UserConfigOverride, expand_path, find_config_file, init_config,
    UnknownFields,
};
use crate::debug;

/// Locate the config file named by `--config`.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let name = expand_path(&cli.config);
    debug!("config"; "searching for {} from {}", name.display(), cwd.display());

    match find_config_file(&name, &cwd) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found. Run 'sitecfg init' to create one.",
            cli.config.display()
        ),
    }
}

/// Load, merge and validate, then install the result globally.
///
/// Returns the parsed override and the path it was read from; the merged
/// configuration is read back through [`cfg`](crate::config::cfg).
pub fn load_config(cli: &Cli) -> Result<(UserConfigOverride, PathBuf)> {
    let path = resolve_config_path(cli)?;
    let (config, patch) = UserConfig::load(&path, unknown_fields(cli))?;
    init_config(config);
    Ok((patch, path))
}

const fn unknown_fields(cli: &Cli) -> UnknownFields {
    if cli.strict {
        UnknownFields::Deny
    } else {
        UnknownFields::Warn
    }
}

/// Path relative to `base` when possible, for display.
pub fn display_path(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
