use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::octree::DEFAULT_EPSILON;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Dimensions of an octree. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    pub bounding_box_size: f32,
    pub minimum_box_size: f32,
    pub epsilon: f32,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            bounding_box_size: 255.0,
            minimum_box_size: 1.0,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl OctreeConfig {
    pub fn from_json_str(input: &str) -> Result<OctreeConfig, ConfigError> {
        let config: OctreeConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<OctreeConfig, ConfigError> {
        let input = fs::read_to_string(path)?;
        OctreeConfig::from_json_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounding_box_size.is_finite() || !self.minimum_box_size.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "box sizes need to be finite, got {} and {}",
                self.bounding_box_size, self.minimum_box_size
            )));
        }
        if self.minimum_box_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "minimum_box_size needs to be > 0, got {}",
                self.minimum_box_size
            )));
        }
        if self.minimum_box_size > self.bounding_box_size {
            return Err(ConfigError::Invalid(format!(
                "minimum_box_size {} exceeds bounding_box_size {}",
                self.minimum_box_size, self.bounding_box_size
            )));
        }
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "epsilon needs to be >= 0, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
