//! Narrator configuration persistence.
//!
//! Settings live in a `herald` TOML file managed by `confy`. Loading never
//! fails the caller: a missing or unreadable file falls back to defaults so
//! the narrator always starts.

use herald_types::NarratorConfig;

use crate::error::HeraldError;

const APP_NAME: &str = "herald";

/// Load the narrator config, falling back to defaults on any failure.
pub fn load_or_default() -> NarratorConfig {
    confy::load(APP_NAME, None).unwrap_or_else(|err| {
        tracing::warn!("[CONFIG] Failed to load narrator config: {err}, using defaults");
        NarratorConfig::default()
    })
}

/// Load the narrator config, surfacing the failure.
pub fn load() -> Result<NarratorConfig, HeraldError> {
    Ok(confy::load(APP_NAME, None)?)
}

/// Persist the narrator config.
pub fn store(config: &NarratorConfig) -> Result<(), HeraldError> {
    confy::store(APP_NAME, None, config)?;
    Ok(())
}
