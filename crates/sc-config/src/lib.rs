mod config;
mod error;
mod log_level;
mod logging_config;
mod network_config;
mod recovery_config;
mod registration_config;
mod storage_config;
mod wallet_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use network_config::NetworkConfig;
pub use recovery_config::RecoveryConfig;
pub use registration_config::RegistrationConfig;
pub use storage_config::StorageConfig;
pub use wallet_config::WalletConfig;

pub const CONFIG_DIR_ENV: &str = "SC_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".sharecar";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_RECOVERY_PREFIX: &str = "SC-";
const DEFAULT_RECOVERY_LENGTH: usize = 16;
const DEFAULT_REQUIRE_EMAIL: bool = false;
const DEFAULT_RPC_URL: &str = "https://soroban-testnet.stellar.org";
const DEFAULT_CONTRACT_ID: &str = "CC3L662DI5UCCPUZ6JZAWDMGNHTVEP6OYOX3VT6Y5WT4CAGJQ3GZARPQ";
const DEFAULT_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";
const DEFAULT_NETWORK_DEMO: bool = true;
const DEFAULT_WALLET_ADDRESS: &str = "GDEMO7SHARECAR2WALLET3ADDRESS4TESTNET5ACCOUNT6XLM7AAAAAA";
