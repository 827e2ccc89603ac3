use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::{FlightEnvelope, PickupConfig, PowerUpDurations};
use crate::components::DroneConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid game configuration: {0}")]
    ValidationError(String),
}

/// Everything the flight core and its host plugin are tuned with.
///
/// Every section is optional in YAML; missing sections and fields fall back
/// to their defaults.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub drone: DroneConfig,
    pub envelope: FlightEnvelope,
    pub pickups: PickupConfig,
    pub power_ups: PowerUpDurations,
}

impl GameConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let problem = self
            .drone
            .invalid_parameter()
            .or_else(|| self.envelope.invalid_parameter())
            .or_else(|| self.pickups.invalid_parameter())
            .or_else(|| self.power_ups.invalid_parameter());

        match problem {
            Some(message) => Err(ConfigError::ValidationError(message)),
            None => {
                let start_altitude = self.drone.start_position.y;
                if start_altitude < self.envelope.min_altitude
                    || start_altitude > self.envelope.max_altitude
                {
                    return Err(ConfigError::ValidationError(format!(
                        "start altitude {} is outside [{}, {}]",
                        start_altitude, self.envelope.min_altitude, self.envelope.max_altitude
                    )));
                }
                Ok(())
            }
        }
    }
}
