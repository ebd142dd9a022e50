//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading plant
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PlantConfig, PlantFile, RestrictionsConfig, SlotsFile};

/// Loads and provides access to the plant configuration.
///
/// # Directory Structure
///
/// ```text
/// config/plant/
/// ├── plant.yaml         # Plant name, reference zone and rotation anchor
/// ├── slots.yaml         # The four daily slots
/// └── restrictions.yaml  # Restriction keywords and rule targets
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_rota::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/plant").unwrap();
/// println!("Loaded plant: {}", loader.config().name());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlantConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing ([`EngineError::ConfigNotFound`])
    /// - Any file contains invalid YAML ([`EngineError::ConfigParseError`])
    /// - The files break a rotation invariant ([`EngineError::InvalidConfig`],
    ///   [`EngineError::InvalidTimeZone`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let plant = Self::load_yaml::<PlantFile>(&path.join("plant.yaml"))?;
        let slots = Self::load_yaml::<SlotsFile>(&path.join("slots.yaml"))?;
        let restrictions = Self::load_yaml::<RestrictionsConfig>(&path.join("restrictions.yaml"))?;

        let config = PlantConfig::new(plant, slots.slots, restrictions)?;
        debug!(
            plant = config.name(),
            zone = %config.zone(),
            anchor = %config.anchor().week_start(),
            "Loaded plant configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PlantConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::RestrictionTag;

    fn config_path() -> &'static str {
        "./config/plant"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().zone(), chrono_tz::Europe::Rome);
        assert_eq!(
            loader.config().anchor().week_start(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_shipped_configuration_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_config(), PlantConfig::default());
    }

    #[test]
    fn test_slots_loaded_in_rotation_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ids: Vec<&str> = loader
            .config()
            .slots()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Morning", "Night", "Evening", "Afternoon"]);
    }

    #[test]
    fn test_restriction_keywords_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let keywords = &loader.config().restrictions().keywords;
        assert!(keywords[&RestrictionTag::NoNightShift].contains(&"no night".to_string()));
        assert_eq!(loader.config().restrictions().rules.night_slot, "Night");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("plant.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
