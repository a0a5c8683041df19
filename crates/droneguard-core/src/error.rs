//! Error types for configuration and stepping.

use thiserror::Error;

/// A configuration that would produce undefined motion or an episode that
/// can never run.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("map_size must be positive, got {0}")]
    MapSize(i32),
    #[error("num_drones must be non-zero")]
    NoDrones,
    #[error("detection_radius {radius} must be positive and below map_size {map_size}")]
    DetectionRadius { radius: f64, map_size: i32 },
    #[error("center_radius {0} must be finite and non-negative")]
    CenterRadius(f64),
    #[error("enemies_spawn_interval must be non-zero")]
    ZeroSpawnInterval,
    #[error("max_steps must be non-zero")]
    ZeroStepBudget,
    #[error("angular_step {0} must be finite and positive")]
    AngularStep(f64),
    #[error("{kind} orbit band {min}..{max} must be non-negative and non-empty")]
    OrbitBand {
        kind: &'static str,
        min: i32,
        max: i32,
    },
}

/// Errors returned by the engine.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("expected {expected} drone actions, got {actual}")]
    ActionCount { expected: usize, actual: usize },
    #[error("action {index} has code {code}, codes must be below {limit}")]
    ActionCode { index: usize, code: u8, limit: u8 },
    #[error("episode already terminated at step {step}; call reset first")]
    EpisodeTerminated { step: u64 },
}
