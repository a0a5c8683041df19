//! Fundamental geometric and simulation types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::geometry;

/// Integer grid position. Drones and agents are wrapped onto the map,
/// enemies are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(pub IVec2);

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        geometry::distance(self.0, other.0)
    }

    /// Whether `other` lies within `radius` (inclusive).
    pub fn within(&self, other: &Position, radius: f64) -> bool {
        self.distance_to(other) <= radius
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self(v)
    }
}

/// Half-open band `[min, max)` of integer orbit radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitBand {
    pub min: i32,
    pub max: i32,
}

impl OrbitBand {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min >= 0 && self.min < self.max
    }
}
