//! Configuration section definitions.
//!
//! Each module corresponds to a section of the host's user config:
//!
//! | Module       | TOML Section     | Purpose                               |
//! |--------------|------------------|---------------------------------------|
//! | `site`       | `[site]`         | Metadata, pagination, links, footer   |
//! | `seo`        | `[seo]`          | Twitter handle, extra meta/link tags  |
//! | `appearance` | `[appearance]`   | Color scheme and locale               |

mod appearance;
mod seo;
pub mod site;

pub use appearance::{AppearanceConfig, Theme};
pub use seo::{LinkTag, MetaTag, SeoConfig};
pub use site::SiteConfig;
