//! Kinematic update system.
//!
//! Orbiters (drones and enforcement agents) advance their angle and are
//! re-projected onto the wrapped map. Enemies take one rounded unit step
//! toward the center. Motion never depends on detection results.

use glam::IVec2;
use hecs::World;

use droneguard_core::components::{Enemy, Orbit};
use droneguard_core::constants::ENEMY_SPEED;
use droneguard_core::geometry::{advance_toward, orbit_position};
use droneguard_core::types::Position;

/// Run one motion step for every entity.
pub fn run(world: &mut World, center: IVec2, map_size: i32) {
    for (_entity, (orbit, pos)) in world.query_mut::<(&mut Orbit, &mut Position)>() {
        orbit.angle += orbit.angular_step;
        pos.0 = orbit_position(center, orbit.radius, orbit.angle, map_size);
    }

    for (_entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        pos.0 = advance_toward(pos.0, center, ENEMY_SPEED);
    }
}
