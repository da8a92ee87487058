//! Footer lines with host-substituted placeholders.
//!
//! Lines are HTML fragments. `%year`, `%website` and `%author` are kept
//! verbatim in the configuration; the host substitutes them at render
//! time. [`FooterLine::render`] reproduces that substitution for previews.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder tokens understood by the host.
pub const PLACEHOLDERS: [&str; 3] = ["%year", "%website", "%author"];

/// One footer line, stored exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FooterLine(String);

/// Values substituted into footer placeholders.
#[derive(Debug, Clone, Copy)]
pub struct FooterContext<'a> {
    pub year: i32,
    pub website: &'a str,
    pub author: &'a str,
}

impl FooterLine {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholders present in this line, in [`PLACEHOLDERS`] order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDERS
            .into_iter()
            .filter(|token| self.0.contains(token))
            .collect()
    }

    /// Substitute placeholders the way the host does at render time.
    ///
    /// Substitution is a single pass: placeholder text inside a substituted
    /// value is left alone.
    pub fn render(&self, ctx: &FooterContext<'_>) -> String {
        let year = ctx.year.to_string();
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            let hit = [
                ("%year", year.as_str()),
                ("%website", ctx.website),
                ("%author", ctx.author),
            ]
            .into_iter()
            .find(|(token, _)| tail.starts_with(token));

            match hit {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push('%');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl From<&str> for FooterLine {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl fmt::Display for FooterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COPYRIGHT: &str = r#"© %year <a target="_blank" href="%website">%author</a>"#;

    #[test]
    fn test_placeholders_kept_verbatim() {
        let line = FooterLine::from(COPYRIGHT);
        assert_eq!(line.as_str(), COPYRIGHT);
        assert_eq!(line.to_string(), COPYRIGHT);
        assert_eq!(line.placeholders(), ["%year", "%website", "%author"]);
    }

    #[test]
    fn test_render() {
        let line = FooterLine::from(COPYRIGHT);
        let ctx = FooterContext {
            year: 2024,
            website: "https://example.com/",
            author: "Alice",
        };
        assert_eq!(
            line.render(&ctx),
            r#"© 2024 <a target="_blank" href="https://example.com/">Alice</a>"#
        );
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let line = FooterLine::from(COPYRIGHT);
        let ctx = FooterContext {
            year: 2024,
            website: "https://example.com/?by=%author",
            author: "%year",
        };
        assert_eq!(
            line.render(&ctx),
            r#"© 2024 <a target="_blank" href="https://example.com/?by=%author">%year</a>"#
        );
        assert_eq!(FooterLine::from("100% %years").render(&ctx), "100% 2024s");
    }

    #[test]
    fn test_no_placeholders() {
        let line = FooterLine::from("Proudly published with Astro");
        assert!(line.placeholders().is_empty());
        let ctx = FooterContext {
            year: 2024,
            website: "",
            author: "",
        };
        assert_eq!(line.render(&ctx), "Proudly published with Astro");
    }
}
