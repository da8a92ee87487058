//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections declare their paths with [`config_fields!`], which generates
/// a `FIELDS` constant so diagnostics never spell a path by hand.
///
/// # Example
///
/// ```ignore
/// config_fields!(SeoConfig, SeoConfigFields, "seo" {
///     twitter => "twitter",
///     meta => "meta",
/// });
///
/// // Usage:
/// diag.error(SeoConfig::FIELDS.twitter, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path of one element inside a list field, e.g. `site.navLinks[2].href`.
    pub fn indexed(&self, index: usize, key: &str) -> IndexedPath {
        IndexedPath(format!("{}[{index}].{key}", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Owned path for a single list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPath(String);

impl IndexedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IndexedPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IndexedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

/// Declare the `FIELDS` constant of a config section.
///
/// Field names are the serialized (camelCase) keys, joined to the
/// section prefix.
#[macro_export]
macro_rules! config_fields {
    ($ty:ident, $fields:ident, $section:literal { $($field:ident => $key:literal),* $(,)? }) => {
        /// Generated field path accessors.
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            /// Field paths for diagnostic messages.
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(concat!($section, ".", $key)),)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = $section;
        }
    };
}
