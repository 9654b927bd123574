use crate::{ConfigError, ConfigErrorResult, DEFAULT_RECOVERY_LENGTH, DEFAULT_RECOVERY_PREFIX};

use serde::Deserialize;

pub const MIN_RECOVERY_LENGTH: usize = 8;
pub const MAX_RECOVERY_LENGTH: usize = 64;
pub const MAX_RECOVERY_PREFIX_LENGTH: usize = 8;

/// Shape of generated recovery codes: `<prefix><length random chars>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    pub prefix: String,
    pub length: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            prefix: String::from(DEFAULT_RECOVERY_PREFIX),
            length: DEFAULT_RECOVERY_LENGTH,
        }
    }
}

impl RecoveryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_RECOVERY_LENGTH..=MAX_RECOVERY_LENGTH).contains(&self.length) {
            return Err(ConfigError::recovery(format!(
                "recovery.length must be {}-{}, got {}",
                MIN_RECOVERY_LENGTH, MAX_RECOVERY_LENGTH, self.length
            )));
        }

        if self.prefix.is_empty() || self.prefix.len() > MAX_RECOVERY_PREFIX_LENGTH {
            return Err(ConfigError::recovery(format!(
                "recovery.prefix must be 1-{} characters, got {:?}",
                MAX_RECOVERY_PREFIX_LENGTH, self.prefix
            )));
        }

        if self.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::recovery(
                "recovery.prefix must not contain whitespace",
            ));
        }

        Ok(())
    }
}
