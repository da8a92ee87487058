//! Navigation and social link entries.
//!
//! # Example
//!
//! ```toml
//! [[site.navLinks]]
//! name = "Archive"
//! href = "/archive"
//!
//! [[site.socialLinks]]
//! name = "github"
//! href = "https://github.com/alice"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A named link rendered by the host, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display name (also selects the icon for social links).
    pub name: String,
    /// Target URL or site path.
    pub href: String,
}

impl Link {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Which list a link belongs to; decides what `href` may look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `site.socialLinks`: absolute URL or rooted path (e.g. `/atom.xml`).
    Social,
    /// `site.navLinks`: site path.
    Nav,
}

/// Validate every entry of a link list.
///
/// # Checks
/// - `name` and `href` must be non-empty (error)
/// - social `href` should be an absolute URL or a rooted path (warning)
/// - nav `href` should start with `/` (warning)
pub fn validate_links(
    links: &[Link],
    kind: LinkKind,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (i, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            diag.error(field.indexed(i, "name"), "link name must not be empty");
        }

        let href = link.href.trim();
        if href.is_empty() {
            diag.error_with_hint(
                field.indexed(i, "href"),
                format!("link '{}' has an empty href", link.name),
                match kind {
                    LinkKind::Social => "use a full URL like https://github.com/you",
                    LinkKind::Nav => "use a site path like /archive",
                },
            );
            continue;
        }

        match kind {
            LinkKind::Social if !href.starts_with('/') && !is_absolute_url(href) => {
                diag.warn(
                    field.indexed(i, "href"),
                    format!("'{href}' is neither an absolute URL nor a rooted path"),
                );
            }
            LinkKind::Nav if !href.starts_with('/') => {
                diag.warn(
                    field.indexed(i, "href"),
                    format!("'{href}' does not start with `/`, nav links are site paths"),
                );
            }
            _ => {}
        }
    }
}

/// Check whether `href` parses as a URL with a scheme (`https:`, `mailto:`, ...).
pub fn is_absolute_url(href: &str) -> bool {
    url::Url::parse(href).is_ok()
}
