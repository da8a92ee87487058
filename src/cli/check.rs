//! `sitecfg check`: load, merge, validate and summarize.

use anyhow::Result;
use std::path::Path;

use crate::config::{UserConfig, UserConfigOverride};
use crate::log;
use crate::utils::plural_count;

/// Print a summary of a configuration that passed validation.
pub fn run_check(config: &UserConfig, patch: &UserConfigOverride, path: &Path) -> Result<()> {
    for line in summary(config, patch, path) {
        log!("check"; "{}", line);
    }
    log!("ok"; "configuration is valid");
    Ok(())
}

/// Summary lines shown by `check`.
pub fn summary(config: &UserConfig, patch: &UserConfigOverride, path: &Path) -> Vec<String> {
    let site = &config.site;
    let overridden = patch.present_fields();

    let mut lines = vec![
        format!(
            "{} overrides {}",
            path.display(),
            plural_count(overridden.len(), "field")
        ),
        format!("{} by {} ({})", site.title, site.author, site.website),
        format!("{} per page", plural_count(site.page_size.max(0) as usize, "post")),
        format!(
            "{}, {}, {}",
            plural_count(site.nav_links.len(), "nav link"),
            plural_count(site.social_links.len(), "social link"),
            plural_count(site.category_map.len(), "category path"),
        ),
        format!(
            "{}, {} with placeholders",
            plural_count(site.footer.len(), "footer line"),
            site.footer
                .iter()
                .filter(|line| !line.placeholders().is_empty())
                .count()
        ),
    ];

    let warnings = config.diagnose().warnings().len();
    if warnings > 0 {
        lines.push(format!("{} to review", plural_count(warnings, "warning")));
    }

    if !overridden.is_empty() {
        let names: Vec<_> = overridden.iter().map(|f| f.as_str()).collect();
        lines.push(format!("overridden: {}", names.join(", ")));
    }

    lines
}
