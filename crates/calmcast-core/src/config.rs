//! Configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/calmcast/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::biometrics::SimulationPolicy;
use crate::error::{Error, Result};
use crate::mood::DEFAULT_WINDOW_DAYS;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/calmcast.toml");

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Mood window settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodConfig {
    pub window_days: usize,
}

/// Biometric source settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiometricsConfig {
    pub allow_simulated: bool,
    pub simulation_seed: u64,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mood: MoodConfig,
    pub biometrics: BiometricsConfig,
    pub source: ConfigSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mood: MoodConfig {
                window_days: DEFAULT_WINDOW_DAYS,
            },
            biometrics: BiometricsConfig {
                allow_simulated: true,
                simulation_seed: 0,
            },
            source: ConfigSource::Embedded,
        }
    }
}

impl Config {
    /// Load from `path` if given, else the data dir override, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing data dir
    /// override is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.exists() => Self::from_file(&default_path),
            _ => Self::parse(DEFAULT_CONFIG, ConfigSource::Embedded),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
        tracing::debug!(path = %path.display(), "Loading config");
        Self::parse(&content, ConfigSource::File(path.to_path_buf()))
    }

    /// Parse TOML content, filling unset keys from the defaults
    pub fn parse(content: &str, source: ConfigSource) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config {
            source,
            ..Config::default()
        };

        if let Some(mood) = raw.mood {
            if let Some(window_days) = mood.window_days {
                if window_days == 0 {
                    return Err(Error::Config(
                        "mood.window_days must be at least 1".to_string(),
                    ));
                }
                config.mood.window_days = window_days;
            }
        }

        if let Some(biometrics) = raw.biometrics {
            if let Some(allow) = biometrics.allow_simulated {
                config.biometrics.allow_simulated = allow;
            }
            if let Some(seed) = biometrics.simulation_seed {
                config.biometrics.simulation_seed = seed;
            }
        }

        Ok(config)
    }

    pub fn simulation_policy(&self) -> SimulationPolicy {
        SimulationPolicy::from_allow(self.biometrics.allow_simulated)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("calmcast").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    mood: Option<RawMood>,
    biometrics: Option<RawBiometrics>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMood {
    window_days: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBiometrics {
    allow_simulated: Option<bool>,
    simulation_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_default_parses() {
        let config = Config::parse(DEFAULT_CONFIG, ConfigSource::Embedded).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            "[biometrics]\nallow_simulated = false\n",
            ConfigSource::Embedded,
        )
        .unwrap();
        assert_eq!(config.mood.window_days, 7);
        assert!(!config.biometrics.allow_simulated);
        assert_eq!(config.simulation_policy(), SimulationPolicy::Deny);
    }

    #[test]
    fn test_rejects_zero_window() {
        let result = Config::parse("[mood]\nwindow_days = 0\n", ConfigSource::Embedded);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        assert!(Config::parse("[mood\n", ConfigSource::Embedded).is_err());
        assert!(Config::parse("[mood]\nwindow = 3\n", ConfigSource::Embedded).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mood]\nwindow_days = 14").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.mood.window_days, 14);
        assert_eq!(config.source, ConfigSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
