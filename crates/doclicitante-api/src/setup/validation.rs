//! Startup configuration validation

use anyhow::Result;
use doclicitante_core::Config;

/// Validate configuration before anything else touches it.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;
    Ok(())
}
