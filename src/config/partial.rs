//! The user override: every field optional.
//!
//! Present fields replace the host defaults when merged; absent fields
//! keep them. Lists are replaced as a whole, never concatenated.

use serde::{Deserialize, Serialize};

use super::FieldPath;
use super::section::site::{CategoryEntry, FooterLine, Link};
use super::section::{AppearanceConfig, LinkTag, MetaTag, SeoConfig, SiteConfig, Theme};

/// Partial view over [`UserConfig`](super::UserConfig) as declared by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<AppearanceOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_links: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_map: Option<Vec<CategoryEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<FooterLine>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Vec<MetaTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<LinkTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Replace `target` if the override provides a value.
fn update_option<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Record `field` when the override provides it.
fn mark<T>(present: &mut Vec<FieldPath>, field: FieldPath, value: &Option<T>) {
    if value.is_some() {
        present.push(field);
    }
}

/// Render an ignored field as `site.navLinks[0].icon`.
///
/// `Option` and newtype layers carry no key and are skipped.
fn dotted_path(path: &serde_ignored::Path) -> String {
    use serde_ignored::Path;

    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", dotted_path(parent)),
        Path::Map { parent, key } => {
            let parent = dotted_path(parent);
            if parent.is_empty() {
                key.clone()
            } else {
                format!("{parent}.{key}")
            }
        }
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => dotted_path(parent),
    }
}

impl UserConfigOverride {
    /// Parse an override from TOML.
    #[cfg(test)]
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(dotted_path(&path));
        })?;
        Ok((config, ignored))
    }

    /// Field paths this override replaces, in declaration order of the schema.
    pub fn present_fields(&self) -> Vec<FieldPath> {
        let mut present = Vec::new();

        if let Some(site) = &self.site {
            let fields = SiteConfig::FIELDS;
            mark(&mut present, fields.title, &site.title);
            mark(&mut present, fields.subtitle, &site.subtitle);
            mark(&mut present, fields.author, &site.author);
            mark(&mut present, fields.description, &site.description);
            mark(&mut present, fields.website, &site.website);
            mark(&mut present, fields.page_size, &site.page_size);
            mark(&mut present, fields.social_links, &site.social_links);
            mark(&mut present, fields.nav_links, &site.nav_links);
            mark(&mut present, fields.category_map, &site.category_map);
            mark(&mut present, fields.footer, &site.footer);
        }

        if let Some(seo) = &self.seo {
            let fields = SeoConfig::FIELDS;
            mark(&mut present, fields.twitter, &seo.twitter);
            mark(&mut present, fields.meta, &seo.meta);
            mark(&mut present, fields.link, &seo.link);
        }

        if let Some(appearance) = &self.appearance {
            let fields = AppearanceConfig::FIELDS;
            mark(&mut present, fields.theme, &appearance.theme);
            mark(&mut present, fields.locale, &appearance.locale);
        }

        present
    }
}

impl SiteOverride {
    pub fn apply(self, site: &mut SiteConfig) {
        update_option(&mut site.title, self.title);
        update_option(&mut site.subtitle, self.subtitle);
        update_option(&mut site.author, self.author);
        update_option(&mut site.description, self.description);
        update_option(&mut site.website, self.website);
        update_option(&mut site.page_size, self.page_size);
        update_option(&mut site.social_links, self.social_links);
        update_option(&mut site.nav_links, self.nav_links);
        update_option(&mut site.category_map, self.category_map);
        update_option(&mut site.footer, self.footer);
    }
}

impl SeoOverride {
    pub fn apply(self, seo: &mut SeoConfig) {
        update_option(&mut seo.twitter, self.twitter);
        update_option(&mut seo.meta, self.meta);
        update_option(&mut seo.link, self.link);
    }
}

impl AppearanceOverride {
    pub fn apply(self, appearance: &mut AppearanceConfig) {
        update_option(&mut appearance.theme, self.theme);
        update_option(&mut appearance.locale, self.locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserConfig;

    const BLOG: &str = r#"
[site]
title = "锦的博客"
subtitle = "JinBlog"
author = "JinJieBeWater"
description = "JinJie's Blog，记录生活，记录成长"
website = "https://jinjiebewater-blog.vercel.app/"
pageSize = 5
socialLinks = [
    { name = "github", href = "https://github.com/JinJieBeWater" },
    { name = "rss", href = "/atom.xml" },
    { name = "twitter", href = "https://x.com/JinJieBeWater" },
]
navLinks = [
    { name = "Posts", href = "/" },
    { name = "Archive", href = "/archive" },
    { name = "Categories", href = "/categories" },
    { name = "About", href = "/about" },
]
categoryMap = [{ name = "JinJieBeWater", path = "JinJieBeWater" }]
footer = [
    '© %year <a target="_blank" href="%website">%author</a>',
    'Theme <a target="_blank" href="https://github.com/Moeyua/astro-theme-typography">Typography</a> by <a target="_blank" href="https://moeyua.com">Moeyua</a>',
    'Proudly published with <a target="_blank" href="https://astro.build/">Astro</a>',
]

[seo]
twitter = "@JinJieBeWater"
meta = []
link = []
"#;

    #[test]
    fn test_absent_fields_are_none() {
        let patch = UserConfigOverride::from_str("[site]\ntitle = \"Hi\"").unwrap();
        let site = patch.site.as_ref().unwrap();
        assert_eq!(site.title.as_deref(), Some("Hi"));
        assert!(site.page_size.is_none());
        assert!(site.nav_links.is_none());
        assert!(patch.seo.is_none());
    }

    #[test]
    fn test_merge_replaces_present_fields_only() {
        let patch = UserConfigOverride::from_str(BLOG).unwrap();
        let merged = UserConfig::default().merge(patch);
        let defaults = UserConfig::default();

        assert_eq!(merged.site.title, "锦的博客");
        assert_eq!(merged.site.description, "JinJie's Blog，记录生活，记录成长");
        assert_eq!(merged.site.social_links.len(), 3);
        assert_eq!(merged.site.category_map[0].path, "JinJieBeWater");
        assert_eq!(merged.site.footer.len(), 3);
        assert_eq!(merged.seo.twitter, "@JinJieBeWater");
        assert!(merged.seo.meta.is_empty());

        // absent in the override: host defaults
        assert_eq!(merged.appearance, defaults.appearance);
    }

    #[test]
    fn test_lists_are_replaced_not_concatenated() {
        let patch = UserConfigOverride::from_str(
            "[site]\nnavLinks = [{ name = \"Home\", href = \"/\" }]",
        )
        .unwrap();
        let merged = UserConfig::default().merge(patch);
        assert_eq!(merged.site.nav_links, [Link::new("Home", "/")]);
    }

    #[test]
    fn test_empty_list_overrides_default() {
        let patch = UserConfigOverride::from_str("[site]\nsocialLinks = []").unwrap();
        let merged = UserConfig::default().merge(patch);
        assert!(merged.site.social_links.is_empty());
    }

    #[test]
    fn test_present_fields() {
        let patch = UserConfigOverride::from_str(BLOG).unwrap();
        let present: Vec<_> = patch
            .present_fields()
            .into_iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(
            present,
            [
                "site.title",
                "site.subtitle",
                "site.author",
                "site.description",
                "site.website",
                "site.pageSize",
                "site.socialLinks",
                "site.navLinks",
                "site.categoryMap",
                "site.footer",
                "seo.twitter",
                "seo.meta",
                "seo.link",
            ]
        );
    }

    #[test]
    fn test_round_trip_keeps_footer_and_order() {
        let patch = UserConfigOverride::from_str(BLOG).unwrap();

        let toml_text = toml::to_string(&patch).unwrap();
        assert_eq!(UserConfigOverride::from_str(&toml_text).unwrap(), patch);

        let json = serde_json::to_string(&patch).unwrap();
        let back: UserConfigOverride = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patch);

        let footer = back.site.unwrap().footer.unwrap();
        assert_eq!(
            footer[0].as_str(),
            r#"© %year <a target="_blank" href="%website">%author</a>"#
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let (patch, ignored) =
            UserConfigOverride::parse_with_ignored("[site]\ntitle = \"A\"\ntittle = \"B\"\n[rss]\nfullText = true")
                .unwrap();
        assert_eq!(patch.site.unwrap().title.as_deref(), Some("A"));
        assert_eq!(ignored, ["site.tittle", "rss"]);
    }

    #[test]
    fn test_unknown_nested_fields_have_plain_paths() {
        let (_, ignored) = UserConfigOverride::parse_with_ignored(
            "[seo]\nog = 1\n\n[[site.navLinks]]\nname = \"Posts\"\nhref = \"/\"\nicon = \"home\"",
        )
        .unwrap();
        assert_eq!(ignored, ["seo.og", "site.navLinks[0].icon"]);
    }

    #[test]
    fn test_blog_override_is_complete() {
        let (patch, ignored) = UserConfigOverride::parse_with_ignored(BLOG).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");

        let merged = UserConfig::default().merge(patch.clone());
        assert!(merged.validate().is_ok());
        let site = patch.site.as_ref().unwrap();
        assert_eq!(
            site.nav_links.as_deref().unwrap(),
            [
                Link::new("Posts", "/"),
                Link::new("Archive", "/archive"),
                Link::new("Categories", "/categories"),
                Link::new("About", "/about"),
            ]
        );

        let toml_text = toml::to_string(&patch).unwrap();
        assert_eq!(UserConfigOverride::from_str(&toml_text).unwrap(), patch);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(serde_json::from_str::<UserConfigOverride>(&json).unwrap(), patch);
    }
}
