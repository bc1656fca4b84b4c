use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when `init_config`
/// has not been called (tests, benches).
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `path` (or `config.toml` when `None`) plus `EDU__*` environment
/// overrides and installs it. Calling it again replaces the previous
/// configuration. Validation runs later, once logging is up.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    let config = StaticConfig::load_from(path)?;

    let slot = CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()));
    slot.store(Arc::new(config));
    Ok(slot.load_full())
}
