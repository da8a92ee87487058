//! `sitecfg footer`: preview footer lines as the host renders them.

use anyhow::Result;

use crate::config::UserConfig;
use crate::utils::date::current_year;

/// Footer lines with `%year`, `%website` and `%author` substituted.
pub fn render_footer(config: &UserConfig, year: i32) -> Vec<String> {
    let ctx = config.site.footer_context(year);
    config
        .site
        .footer
        .iter()
        .map(|line| line.render(&ctx))
        .collect()
}

pub fn run_footer(config: &UserConfig, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(current_year);
    for line in render_footer(config, year) {
        println!("{line}");
    }
    Ok(())
}
