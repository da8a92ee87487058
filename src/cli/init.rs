//! Configuration template generation.
//!
//! Writes a `site.toml` whose every line is a commented-out host default,
//! so an untouched template overrides nothing.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::UserConfig;
use crate::config::section::{AppearanceConfig, SeoConfig, SiteConfig};
use crate::log;

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

/// Generate site.toml content with comments
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# Site configuration override (sitecfg v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Uncomment a field to replace the default shown.\n");
    out.push_str("# Footer placeholders %year, %website and %author are kept as written.\n\n");

    let defaults = UserConfig::default();
    push_section(&mut out, SiteConfig::TEMPLATE_SECTION, &defaults.site)?;
    push_section(&mut out, SeoConfig::TEMPLATE_SECTION, &defaults.seo)?;
    push_section(&mut out, AppearanceConfig::TEMPLATE_SECTION, &defaults.appearance)?;

    Ok(out)
}

/// Serialize one section's defaults as commented TOML.
fn push_section<T: serde::Serialize>(out: &mut String, section: &str, value: &T) -> Result<()> {
    let body = toml::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize [{section}] defaults"))?;

    out.push_str(&format!("# [{section}]\n"));
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
            continue;
        }
        // nested tables of the section, e.g. [[navLinks]] -> [[site.navLinks]]
        let line = if let Some(rest) = line.strip_prefix("[[") {
            format!("[[{section}.{rest}")
        } else {
            line.to_string()
        };
        out.push_str("# ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    Ok(())
}

/// Write the template into `root`, refusing to overwrite.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or edit it directly.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// `sitecfg init`
pub fn run_init(dir: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template()?);
        return Ok(());
    }

    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    write_config(&root)?;

    log!("init"; "wrote {}", root.join(CONFIG_FILE).display());
    Ok(())
}
