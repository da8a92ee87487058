//! Global config handle.
//!
//! The merged configuration is installed once at startup and only read
//! afterwards.

use crate::config::UserConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<UserConfig> = OnceLock::new();

/// Install the validated configuration.
///
/// The first call wins; later calls return the already installed value.
#[inline]
pub fn init_config(config: UserConfig) -> &'static UserConfig {
    CONFIG.get_or_init(|| config)
}

/// Read the installed configuration.
///
/// Falls back to host defaults when nothing was installed.
#[inline]
pub fn cfg() -> &'static UserConfig {
    CONFIG.get_or_init(UserConfig::default)
}
