//! Breach check: has any enemy reached the protected center?

use glam::IVec2;
use hecs::World;

use droneguard_core::geometry::distance;

use crate::roster::{self, EnemySlot};

/// First enemy in spawn order within `center_radius` of `center`, if any.
/// Later enemies are not examined once one qualifies.
pub fn run(world: &World, center: IVec2, center_radius: f64) -> Option<EnemySlot> {
    roster::enemies(world)
        .into_iter()
        .find(|e| distance(e.position, center) <= center_radius)
}
