//! Enemy spawning system: adds one enemy at the map boundary on a cadence.

use glam::IVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use droneguard_core::enums::Edge;
use droneguard_core::events::SimEvent;

use crate::world_setup;

/// Spawn cadence plus the running enemy serial for the episode.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    /// An enemy spawns on every step that is a multiple of this.
    pub interval: u64,
    pub map_size: i32,
    next_serial: u32,
}

impl EnemySpawner {
    pub fn new(interval: u64, map_size: i32) -> Self {
        Self {
            interval,
            map_size,
            next_serial: 0,
        }
    }

    /// Whether `step` is a spawn step.
    pub fn is_due(&self, step: u64) -> bool {
        step % self.interval == 0
    }

    /// Number of enemies spawned so far this episode.
    pub fn spawned(&self) -> u32 {
        self.next_serial
    }

    /// Forget all spawned enemies (new episode).
    pub fn reset(&mut self) {
        self.next_serial = 0;
    }

    /// Place an enemy at `position` with the next serial.
    pub fn spawn_at(&mut self, world: &mut World, position: IVec2) -> (u32, Entity) {
        let serial = self.next_serial;
        self.next_serial += 1;
        (serial, world_setup::spawn_enemy(world, serial, position))
    }
}

/// Pick a uniformly random point on the map boundary.
///
/// Edge and in-edge offset come from a single draw so every spawn consumes
/// exactly one RNG call, keeping replays count-stable.
pub fn boundary_point(rng: &mut ChaCha8Rng, map_size: i32) -> (Edge, IVec2) {
    let span = map_size as u64 + 1;
    let draw = rng.gen_range(0..4 * span);
    let offset = (draw % span) as i32;
    match draw / span {
        0 => (Edge::Top, IVec2::new(offset, 0)),
        1 => (Edge::Bottom, IVec2::new(offset, map_size)),
        2 => (Edge::Left, IVec2::new(0, offset)),
        _ => (Edge::Right, IVec2::new(map_size, offset)),
    }
}

/// Spawn an enemy if `step` is on the cadence.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut EnemySpawner,
    step: u64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if !spawner.is_due(step) {
        return None;
    }

    let (edge, position) = boundary_point(rng, spawner.map_size);
    let (serial, entity) = spawner.spawn_at(world, position);
    debug!(enemy = serial, ?edge, x = position.x, y = position.y, step, "enemy spawned");
    events.push(SimEvent::EnemySpawned {
        enemy: serial,
        edge,
        position,
    });
    Some(entity)
}
