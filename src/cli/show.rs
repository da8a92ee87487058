//! `sitecfg show`: print the override or the merged configuration.

use anyhow::{Context, Result};
use serde::Serialize;

use super::OutputFormat;
use crate::config::{UserConfig, UserConfigOverride};

/// Print the override as declared, or the merged result with `merged`.
pub fn run_show(
    config: &UserConfig,
    patch: &UserConfigOverride,
    merged: bool,
    format: OutputFormat,
) -> Result<()> {
    let text = if merged {
        render(config, format)?
    } else {
        render(patch, format)?
    };
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Serialize a value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(value).context("Failed to serialize configuration as TOML")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize configuration as JSON")
        }
    }
}
