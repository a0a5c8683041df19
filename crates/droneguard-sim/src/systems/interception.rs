//! Enemy detection system: healthy drones remove enemies they can see.

use hecs::{Entity, World};
use tracing::debug;

use droneguard_core::events::SimEvent;
use droneguard_core::geometry::distance;

use crate::roster;

/// Remove every enemy within `detection_radius` of a non-malicious drone.
///
/// Enemies are checked in spawn order, drones in index order; the first
/// healthy drone in range is credited. Malicious drones never detect.
/// Returns the number of enemies removed.
pub fn run(
    world: &mut World,
    detection_radius: f64,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let sentries: Vec<_> = roster::drones(world)
        .into_iter()
        .filter(|d| !d.malicious)
        .collect();
    if sentries.is_empty() {
        return 0;
    }

    for enemy in roster::enemies(world) {
        let detector = sentries
            .iter()
            .find(|d| distance(d.position, enemy.position) <= detection_radius);

        if let Some(drone) = detector {
            debug!(
                enemy = enemy.serial,
                drone = drone.index,
                x = enemy.position.x,
                y = enemy.position.y,
                "enemy neutralized"
            );
            events.push(SimEvent::EnemyNeutralized {
                enemy: enemy.serial,
                drone: drone.index,
                position: enemy.position,
            });
            despawn_buffer.push(enemy.entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
