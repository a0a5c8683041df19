//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// A defending drone. `index` is stable for the whole episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    pub index: usize,
}

/// A patrolling enforcement agent that can reform malicious drones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementAgent {
    pub index: usize,
}

/// An enemy advancing on the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn order within the episode.
    pub serial: u32,
}

/// Circular patrol around the map center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub radius: f64,
    /// Current angle in radians.
    pub angle: f64,
    /// Signed radians added to `angle` each step.
    pub angular_step: f64,
}

/// Marker: this drone has turned and no longer detects enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Malicious;
