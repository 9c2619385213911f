use crate::models::AppConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the demo configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "Demos.yaml";

/// Default environment prefix, e.g. `DEMOS__FLIGHT_BOOKER__STEP_DELAY_MS=250`.
pub const DEFAULT_ENV_PREFIX: &str = "DEMOS";

/// Configuration manager for loading and saving the YAML configuration file.
///
/// Values are layered: built-in defaults, then `Demos.yaml` (optional), then
/// environment variables under the configured prefix.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
    env_prefix: String,
    env_source: Option<config::Map<String, String>>,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing `Demos.yaml` (e.g., "Demo Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        Self::with_env_prefix(config_dir, DEFAULT_ENV_PREFIX)
    }

    /// Same as [`new`](Self::new) with a custom environment variable prefix.
    pub fn with_env_prefix<P: AsRef<Utf8Path>>(config_dir: P, env_prefix: &str) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
            env_prefix: env_prefix.to_string(),
            env_source: None,
        })
    }

    /// Read overrides from `vars` instead of the process environment.
    ///
    /// Keys use the same form as environment variables, prefix included.
    pub fn with_env_source(mut self, vars: config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Load the configuration.
    ///
    /// # Returns
    /// The layered AppConfig; defaults if neither the file nor overrides exist
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
        }

        let layered = config::Config::builder()
            .add_source(
                config::File::from(self.config_path.as_std_path())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(self.env_source.clone()),
            )
            .build()
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: AppConfig = layered
            .try_deserialize()
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the configuration file.
    ///
    /// # Arguments
    /// * `config` - The AppConfig to save
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager(prefix: &str) -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::with_env_prefix(&config_path, prefix).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (manager, _temp_dir) = create_test_config_manager("DEMOS_UNIT_MISSING");
        let config = manager.load_config().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_save_config() {
        let (manager, _temp_dir) = create_test_config_manager("DEMOS_UNIT_SAVE");

        let mut config = AppConfig::default();
        config.flight_booker.fail_at_step = Some(2);
        config.hello_world.delay_ms = 10;
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_environment_overrides_file() {
        let (manager, _temp_dir) = create_test_config_manager("DEMOS_UNIT_ENV");
        manager.save_config(&AppConfig::default()).unwrap();

        let mut vars = config::Map::new();
        vars.insert(
            "DEMOS_UNIT_ENV__FLIGHT_BOOKER__STEP_DELAY_MS".to_string(),
            "25".to_string(),
        );
        vars.insert("UNRELATED__DEBUG_MODE".to_string(), "true".to_string());
        let manager = manager.with_env_source(vars);

        let loaded = manager.load_config().unwrap();

        assert_eq!(loaded.flight_booker.step_delay_ms, 25);
        assert_eq!(loaded.flight_booker.booking_steps, 5);
        assert!(!loaded.debug_mode);
    }

    #[test]
    fn test_empty_env_source_keeps_file_values() {
        let (manager, _temp_dir) = create_test_config_manager("DEMOS_UNIT_EMPTY");
        let mut config = AppConfig::default();
        config.flight_booker.step_delay_ms = 40;
        manager.save_config(&config).unwrap();

        let loaded = manager
            .with_env_source(config::Map::new())
            .load_config()
            .unwrap();

        assert_eq!(loaded, config);
    }
}
