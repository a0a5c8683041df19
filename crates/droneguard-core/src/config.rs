//! Engine configuration, fixed for the lifetime of an engine.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::OrbitBand;

/// Configuration for a simulation engine.
///
/// Every field has a default, so a JSON file only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same episode.
    pub seed: u64,
    pub map_size: i32,
    pub num_drones: usize,
    /// Informational; enemies are spawned on a cadence.
    pub num_enemies: usize,
    pub detection_radius: f64,
    pub center_radius: f64,
    pub num_enforcement_agents: usize,
    pub enemies_spawn_interval: u64,
    /// Steps to survive for a success.
    pub max_steps: u64,
    pub angular_step: f64,
    pub drone_orbit: OrbitBand,
    pub agent_orbit: OrbitBand,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_size: DEFAULT_MAP_SIZE,
            num_drones: DEFAULT_NUM_DRONES,
            num_enemies: DEFAULT_NUM_ENEMIES,
            detection_radius: DEFAULT_DETECTION_RADIUS,
            center_radius: DEFAULT_CENTER_RADIUS,
            num_enforcement_agents: DEFAULT_NUM_ENFORCEMENT_AGENTS,
            enemies_spawn_interval: DEFAULT_SPAWN_INTERVAL,
            max_steps: DEFAULT_MAX_STEPS,
            angular_step: DEFAULT_ANGULAR_STEP,
            drone_orbit: OrbitBand::new(DRONE_ORBIT_MIN, DRONE_ORBIT_MAX),
            agent_orbit: OrbitBand::new(AGENT_ORBIT_MIN, AGENT_ORBIT_MAX),
        }
    }
}

impl SimConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_size <= 0 {
            return Err(ConfigError::MapSize(self.map_size));
        }
        if self.num_drones == 0 {
            return Err(ConfigError::NoDrones);
        }
        if !(self.detection_radius > 0.0 && self.detection_radius < f64::from(self.map_size)) {
            return Err(ConfigError::DetectionRadius {
                radius: self.detection_radius,
                map_size: self.map_size,
            });
        }
        if !self.center_radius.is_finite() || self.center_radius < 0.0 {
            return Err(ConfigError::CenterRadius(self.center_radius));
        }
        if self.enemies_spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        if !self.angular_step.is_finite() || self.angular_step <= 0.0 {
            return Err(ConfigError::AngularStep(self.angular_step));
        }
        for (kind, band) in [("drone", self.drone_orbit), ("agent", self.agent_orbit)] {
            if !band.is_valid() {
                return Err(ConfigError::OrbitBand {
                    kind,
                    min: band.min,
                    max: band.max,
                });
            }
        }
        Ok(())
    }

    /// The protected center of the map.
    pub fn center(&self) -> IVec2 {
        IVec2::splat(self.map_size / 2)
    }

    /// How many drones start each episode malicious.
    pub fn malicious_count(&self) -> usize {
        (self.num_drones / MALICIOUS_DRONE_DIVISOR)
            .max(1)
            .min(self.num_drones)
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigParseError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Failure to load a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
