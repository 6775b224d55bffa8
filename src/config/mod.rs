use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;

/// Default name of the application settings file.
pub const DEFAULT_CONFIG_FILE: &str = "loadout.yaml";

/// Prefix of environment variables that override file settings (`LOADOUT_PROFILE_DIR`, ...).
pub const ENV_PREFIX: &str = "LOADOUT";

/// Application settings for the `loadout` binary.
///
/// Sources are layered lowest to highest:
/// - built-in defaults
/// - the YAML settings file, when present
/// - `LOADOUT_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding one file per profile
    pub profile_dir: Utf8PathBuf,

    /// Directory for rotating log files
    pub log_dir: Utf8PathBuf,

    /// File name prefix for log files
    pub log_prefix: String,

    /// Log at debug level instead of info
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_dir: Utf8PathBuf::from("profiles"),
            log_dir: Utf8PathBuf::from("logs"),
            log_prefix: "loadout".to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load settings from defaults, the optional file at `path` and the environment.
    ///
    /// A missing file is not an error.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("profile_dir", defaults.profile_dir.as_str())?
            .set_default("log_dir", defaults.log_dir.as_str())?
            .set_default("log_prefix", defaults.log_prefix)?
            .set_default("debug", defaults.debug)?
            .add_source(
                File::from(path.as_std_path())
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read settings from {}", path))?;

        let app_config: Self = config
            .try_deserialize()
            .with_context(|| format!("Invalid settings in {}", path))?;

        tracing::debug!("Loaded application settings: {:?}", app_config);
        Ok(app_config)
    }

    /// Write a settings file holding the defaults.
    ///
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Utf8Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Settings file already exists: {}", path);
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent))?;
        }

        let yaml_string = serde_yaml_ng::to_string(&Self::default())
            .context("Failed to serialize default settings to YAML")?;

        fs::write(path, yaml_string)
            .with_context(|| format!("Failed to write settings file: {}", path))?;

        tracing::info!("Wrote default settings to {}", path);
        Ok(())
    }
}
