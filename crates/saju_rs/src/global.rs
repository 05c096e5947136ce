//! Process-wide configuration.

use std::sync::OnceLock;

use saju_chart::PillarConfig;
use saju_score::FortuneConfig;

use tracing::debug;

use crate::error::SajuError;

/// Configuration used by every convenience function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SajuConfig {
    pub pillars: PillarConfig,
    pub fortune: FortuneConfig,
}

impl SajuConfig {
    pub fn validate(&self) -> Result<(), SajuError> {
        self.pillars.validate()?;
        self.fortune.validate()?;
        Ok(())
    }
}

static CONFIG: OnceLock<SajuConfig> = OnceLock::new();

/// Install the process-wide configuration. Can be called once.
pub fn init(config: SajuConfig) -> Result<(), SajuError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| SajuError::AlreadyInitialized)?;
    debug!(?config, "saju configuration installed");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// The installed configuration, or the defaults before `init`.
pub fn config() -> SajuConfig {
    CONFIG.get().copied().unwrap_or_default()
}
