//! `[appearance]` section configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Color scheme applied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow `prefers-color-scheme` (default).
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: Theme,
    /// UI language of the theme (e.g., "zh-cn", "en-us").
    pub locale: String,
}

crate::config_fields!(AppearanceConfig, AppearanceConfigFields, "appearance" {
    theme => "theme",
    locale => "locale",
});

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            locale: "zh-cn".into(),
        }
    }
}

impl AppearanceConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locale.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locale,
                "must not be empty",
                "use a language tag like \"en-us\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.appearance.theme, Theme::System);
        assert_eq!(config.appearance.locale, "zh-cn");
    }

    #[test]
    fn test_theme_parsing() {
        for (input, expected) in [
            ("light", Theme::Light),
            ("dark", Theme::Dark),
            ("system", Theme::System),
        ] {
            let config = test_parse_config(&format!("[appearance]\ntheme = \"{input}\""));
            assert_eq!(config.appearance.theme, expected, "theme failed for {input}");
        }
    }

    #[test]
    fn test_empty_locale() {
        let appearance = AppearanceConfig {
            locale: " ".into(),
            ..AppearanceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        appearance.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "appearance.locale");
    }
}
