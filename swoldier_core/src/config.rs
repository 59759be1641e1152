//! Configuration file support for Swoldier.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/swoldier/config.toml`.

use crate::engine::{GenerateOptions, DEFAULT_EXERCISES_PER_GROUP};
use crate::{Catalog, Error, Goal, Result, SplitType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Workout generation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_exercises_per_group")]
    pub exercises_per_group: usize,

    /// JSON catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            exercises_per_group: default_exercises_per_group(),
            catalog_path: None,
        }
    }
}

/// Selections used when none are given
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_split")]
    pub split: SplitType,

    #[serde(default = "default_goal")]
    pub goal: Goal,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            split: default_split(),
            goal: default_goal(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("swoldier")
}

fn default_exercises_per_group() -> usize {
    DEFAULT_EXERCISES_PER_GROUP
}

fn default_split() -> SplitType {
    SplitType::Individual
}

fn default_goal() -> Goal {
    Goal::StrengthPower
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("swoldier").join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.generator.exercises_per_group == 0 {
            return Err(Error::Config(
                "generator.exercises_per_group must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::with_exercises_per_group(self.generator.exercises_per_group)
    }

    /// The configured catalog, or the built-in one
    ///
    /// A catalog file is validated on load; the built-in catalog is covered
    /// by its own tests.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.generator.catalog_path {
            Some(path) => Catalog::load_from(path),
            None => Ok(crate::catalog::get_default_catalog().clone()),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.data.data_dir.join("history.jsonl")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data.data_dir.join("profile.json")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
