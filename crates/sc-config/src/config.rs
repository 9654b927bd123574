use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, NetworkConfig, RecoveryConfig, RegistrationConfig, StorageConfig,
    WalletConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub recovery: RecoveryConfig,
    pub registration: RegistrationConfig,
    pub network: NetworkConfig,
    pub wallet: WalletConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SC_CONFIG_DIR env var, else use ./.sharecar/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SC_CONFIG_DIR env var > ./.sharecar/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.recovery.validate()?;
        self.network.validate()?;
        self.wallet.validate()?;

        Ok(())
    }

    /// Absolute directory holding the durable records.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  recovery: prefix={}, length={}",
            self.recovery.prefix, self.recovery.length
        );
        info!(
            "  registration: require_email={}",
            self.registration.require_email
        );
        info!(
            "  network: {} ({}){}",
            self.network.rpc_url,
            self.network.contract_id,
            if self.network.demo { " [demo]" } else { "" }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("SC_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("SC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SC_LOG_FILE", &mut self.logging.file);

        // Recovery codes
        Self::apply_env_string("SC_RECOVERY_PREFIX", &mut self.recovery.prefix);
        Self::apply_env_parse("SC_RECOVERY_LENGTH", &mut self.recovery.length);

        // Registration
        Self::apply_env_bool(
            "SC_REQUIRE_EMAIL",
            &mut self.registration.require_email,
        );

        // Network
        Self::apply_env_string("SC_RPC_URL", &mut self.network.rpc_url);
        Self::apply_env_string("SC_CONTRACT_ID", &mut self.network.contract_id);
        Self::apply_env_string(
            "SC_NETWORK_PASSPHRASE",
            &mut self.network.network_passphrase,
        );
        Self::apply_env_bool("SC_NETWORK_DEMO", &mut self.network.demo);

        // Wallet
        Self::apply_env_string("SC_WALLET_ADDRESS", &mut self.wallet.demo_address);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
