//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site]: metadata, links, categories, footer
//! │   ├── seo        # [seo]
//! │   └── appearance # [appearance]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── partial        # UserConfigOverride (all fields optional)
//! └── mod.rs         # UserConfig (this file)
//! ```
//!
//! Loading reads the user's override, merges it onto the host defaults
//! and validates the result. Every violation is reported at once and is
//! fatal; nothing is deferred to render time.

pub mod partial;
pub mod section;
pub mod types;
mod util;

pub use partial::UserConfigOverride;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};
pub use util::{expand_path, find_config_file};

use section::{AppearanceConfig, SeoConfig, SiteConfig};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// The complete user configuration consumed by the host.
///
/// `UserConfig::default()` holds the host defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Site metadata, pagination, links and footer
    pub site: SiteConfig,

    /// Twitter handle and extra head tags
    pub seo: SeoConfig,

    /// Color scheme and locale
    pub appearance: AppearanceConfig,
}

/// How unknown fields in the override are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Print a warning and ignore them.
    #[default]
    Warn,
    /// Refuse to load.
    Deny,
}

impl UserConfig {
    /// Load an override file, merge it onto the defaults and validate.
    ///
    /// Returns the merged configuration together with the parsed override.
    pub fn load(path: &Path, unknown: UnknownFields) -> Result<(Self, UserConfigOverride)> {
        let patch = Self::read_override(path, unknown)?;
        crate::debug!(
            "config";
            "{} overrides {} field(s)",
            path.display(),
            patch.present_fields().len()
        );

        let config = Self::default().merge(patch.clone());
        config.validate()?;
        Ok((config, patch))
    }

    /// Read and parse an override file with unknown field detection.
    pub fn read_override(path: &Path, unknown: UnknownFields) -> Result<UserConfigOverride> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (patch, ignored) =
            UserConfigOverride::parse_with_ignored(&content).map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            match unknown {
                UnknownFields::Deny => {
                    return Err(ConfigError::UnknownFields(path.to_path_buf(), ignored).into());
                }
                UnknownFields::Warn => Self::print_unknown_fields_warning(&ignored, path),
            }
        }

        Ok(patch)
    }

    /// Apply an override: present fields replace, absent fields keep.
    pub fn merge(mut self, patch: UserConfigOverride) -> Self {
        if let Some(site) = patch.site {
            site.apply(&mut self.site);
        }
        if let Some(seo) = patch.seo {
            seo.apply(&mut self.seo);
        }
        if let Some(appearance) = patch.appearance {
            appearance.apply(&mut self.appearance);
        }
        self
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, the host ignores them:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every check and collect the diagnostics without failing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);
        self.appearance.validate(&mut diag);
        diag
    }

    /// Validate the merged configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse an override and merge it onto the defaults.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> UserConfig {
    let (patch, ignored) = UserConfigOverride::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    UserConfig::default().merge(patch)
}

// ============================================================================
// tests
// ============================================================================
