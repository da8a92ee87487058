//! `[site]` section configuration.
//!
//! Display metadata, pagination, links and footer consumed by the host.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! author = "Alice"
//! website = "https://myblog.com/"
//! pageSize = 5
//! footer = ['© %year <a href="%website">%author</a>']
//!
//! [[site.navLinks]]
//! name = "Posts"
//! href = "/"
//!
//! [[site.categoryMap]]
//! name = "胡适"
//! path = "hu-shi"
//! ```

mod category;
mod footer;
mod link;

pub use category::{CategoryEntry, validate_categories};
pub use footer::{FooterContext, FooterLine};
pub use link::{Link, LinkKind, validate_links};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata and navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    /// Canonical site URL (e.g., "https://example.com/").
    pub website: String,
    /// Posts per listing page. Must be at least 1.
    pub page_size: i64,
    pub social_links: Vec<Link>,
    pub nav_links: Vec<Link>,
    pub category_map: Vec<CategoryEntry>,
    pub footer: Vec<FooterLine>,
}

crate::config_fields!(SiteConfig, SiteConfigFields, "site" {
    title => "title",
    subtitle => "subtitle",
    author => "author",
    description => "description",
    website => "website",
    page_size => "pageSize",
    social_links => "socialLinks",
    nav_links => "navLinks",
    category_map => "categoryMap",
    footer => "footer",
});

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Typography".into(),
            subtitle: "Yet another Astro theme".into(),
            author: "Moeyua".into(),
            description: "Rediscover the beauty of typography".into(),
            website: "https://astro-theme-typography.vercel.app/".into(),
            page_size: 5,
            social_links: vec![
                Link::new("github", "https://github.com/moeyua/astro-theme-typography"),
                Link::new("twitter", "https://twitter.com/moeyua13"),
                Link::new("rss", "/atom.xml"),
            ],
            nav_links: vec![
                Link::new("Posts", "/"),
                Link::new("Archive", "/archive"),
                Link::new("Categories", "/categories"),
                Link::new("About", "/about"),
            ],
            category_map: Vec::new(),
            footer: vec![
                r#"© %year <a target="_blank" href="%website">%author</a>"#.into(),
                r#"Theme <a target="_blank" href="https://github.com/Moeyua/astro-theme-typography">Typography</a> by <a target="_blank" href="https://moeyua.com">Moeyua</a>"#.into(),
                r#"Proudly published with <a target="_blank" href="https://astro.build/">Astro</a>"#.into(),
            ],
        }
    }
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `pageSize` must be at least 1
    /// - `website` must be a non-empty http(s) URL with a host
    /// - link and category entries (see [`validate_links`], [`validate_categories`])
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_size < 1 {
            diag.error_with_hint(
                Self::FIELDS.page_size,
                format!("must be a positive integer, got {}", self.page_size),
                format!("set {}, e.g.: 5", Self::FIELDS.page_size),
            );
        }

        self.validate_website(diag);

        validate_links(
            &self.social_links,
            LinkKind::Social,
            Self::FIELDS.social_links,
            diag,
        );
        validate_links(&self.nav_links, LinkKind::Nav, Self::FIELDS.nav_links, diag);
        validate_categories(&self.category_map, Self::FIELDS.category_map, diag);
    }

    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        if self.website.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "must not be empty",
                "use format like https://example.com",
            );
            return;
        }

        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Placeholder values the host substitutes into footer lines.
    pub fn footer_context(&self, year: i32) -> FooterContext<'_> {
        FooterContext {
            year,
            website: &self.website,
            author: &self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(site: &SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_are_valid() {
        let diag = validate(&SiteConfig::default());
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_page_size_must_be_positive() {
        for page_size in [0, -1, -20] {
            let site = SiteConfig {
                page_size,
                ..SiteConfig::default()
            };
            let diag = validate(&site);
            assert_eq!(diag.len(), 1, "page_size = {page_size}");
            assert_eq!(diag.errors()[0].field, "site.pageSize");
        }

        let site = SiteConfig {
            page_size: 1,
            ..SiteConfig::default()
        };
        assert!(validate(&site).is_empty());
    }

    #[test]
    fn test_website_checks() {
        for (website, expected) in [
            ("", "must not be empty"),
            ("example.com", "invalid URL"),
            ("ftp://example.com", "scheme 'ftp'"),
        ] {
            let site = SiteConfig {
                website: website.into(),
                ..SiteConfig::default()
            };
            let diag = validate(&site);
            assert_eq!(diag.len(), 1, "website = {website:?}");
            assert!(
                diag.errors()[0].message.contains(expected),
                "website = {website:?}: {}",
                diag.errors()[0].message
            );
        }
    }

    #[test]
    fn test_nav_links_keep_order() {
        let config = test_parse_config(
            r#"
[site]
pageSize = 5
navLinks = [
    { name = "Posts", href = "/" },
    { name = "Archive", href = "/archive" },
    { name = "Categories", href = "/categories" },
]
"#,
        );
        assert_eq!(config.site.page_size, 5);
        assert_eq!(
            config.site.nav_links,
            [
                Link::new("Posts", "/"),
                Link::new("Archive", "/archive"),
                Link::new("Categories", "/categories"),
            ]
        );
    }

    #[test]
    fn test_social_links_keep_order() {
        let config = test_parse_config(
            r#"
[[site.socialLinks]]
name = "twitter"
href = "https://x.com/alice"

[[site.socialLinks]]
name = "github"
href = "https://github.com/alice"

[[site.socialLinks]]
name = "rss"
href = "/atom.xml"
"#,
        );
        let names: Vec<_> = config
            .site
            .social_links
            .iter()
            .map(|link| link.name.as_str())
            .collect();
        assert_eq!(names, ["twitter", "github", "rss"]);
    }

    #[test]
    fn test_footer_context() {
        let site = SiteConfig::default();
        let line = &site.footer[0];
        let rendered = line.render(&site.footer_context(2025));
        assert!(rendered.starts_with("© 2025"));
        assert!(rendered.contains("Moeyua"));
        // the stored line is untouched
        assert!(site.footer[0].as_str().contains("%year"));
    }
}
