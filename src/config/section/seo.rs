//! `[seo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [seo]
//! twitter = "@alice"
//! meta = [{ name = "google-site-verification", content = "abc" }]
//! link = [{ rel = "me", href = "https://mastodon.social/@alice" }]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Extra `<meta>` element injected by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Extra `<link>` element injected by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Twitter handle used for card tags (e.g., "@alice").
    pub twitter: String,
    pub meta: Vec<MetaTag>,
    pub link: Vec<LinkTag>,
}

crate::config_fields!(SeoConfig, SeoConfigFields, "seo" {
    twitter => "twitter",
    meta => "meta",
    link => "link",
});

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            twitter: "@moeyua13".into(),
            meta: Vec::new(),
            link: Vec::new(),
        }
    }
}

impl SeoConfig {
    /// Validate SEO tags.
    ///
    /// Tag lists may be empty; declared tags need a `name`/`rel` and a
    /// `href`. A handle without `@` only warns.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let handle = self.twitter.trim();
        if !handle.is_empty() && !handle.starts_with('@') {
            diag.warn(
                Self::FIELDS.twitter,
                format!("handle '{handle}' should start with `@`"),
            );
        }

        for (i, tag) in self.meta.iter().enumerate() {
            if tag.name.trim().is_empty() {
                diag.error(Self::FIELDS.meta.indexed(i, "name"), "meta name must not be empty");
            }
        }

        for (i, tag) in self.link.iter().enumerate() {
            if tag.rel.trim().is_empty() {
                diag.error(Self::FIELDS.link.indexed(i, "rel"), "link rel must not be empty");
            }
            if tag.href.trim().is_empty() {
                diag.error(
                    Self::FIELDS.link.indexed(i, "href"),
                    format!("link '{}' has an empty href", tag.rel),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_empty_lists_are_valid() {
        let config = test_parse_config("[seo]\ntwitter = \"@alice\"\nmeta = []\nlink = []");
        assert!(config.seo.meta.is_empty());
        assert!(config.seo.link.is_empty());

        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_tags() {
        let config = test_parse_config(
            r#"
[[seo.meta]]
name = "google-site-verification"
content = "abc"

[[seo.link]]
rel = "me"
href = "https://mastodon.social/@alice"
"#,
        );
        assert_eq!(config.seo.meta[0].name, "google-site-verification");
        assert_eq!(config.seo.link[0].rel, "me");
    }

    #[test]
    fn test_invalid_tags() {
        let seo = SeoConfig {
            twitter: "alice".into(),
            meta: vec![MetaTag {
                name: String::new(),
                content: "x".into(),
            }],
            link: vec![LinkTag {
                rel: String::new(),
                href: String::new(),
            }],
        };
        let mut diag = ConfigDiagnostics::new();
        seo.validate(&mut diag);

        assert_eq!(diag.len(), 3);
        assert_eq!(diag.errors()[0].field, "seo.meta[0].name");
        assert_eq!(diag.errors()[1].field, "seo.link[0].rel");
        assert_eq!(diag.errors()[2].field, "seo.link[0].href");
        assert_eq!(diag.warnings()[0].field, "seo.twitter");
    }
}
