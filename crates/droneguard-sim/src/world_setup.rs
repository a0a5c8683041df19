//! Entity spawn factories for setting up the simulation world.
//!
//! Creates drones, enforcement agents and enemies with appropriate
//! component bundles, and picks the malicious subset.

use std::f64::consts::TAU;

use glam::IVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use droneguard_core::components::*;
use droneguard_core::config::SimConfig;
use droneguard_core::geometry::orbit_position;
use droneguard_core::types::{OrbitBand, Position};

/// Populate an empty world for a fresh episode.
/// Returns the indices of the drones that start malicious, ascending.
pub fn setup_episode(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) -> Vec<usize> {
    spawn_drones(world, rng, config);
    spawn_enforcement_agents(world, rng, config);

    let malicious = choose_malicious(rng, config.num_drones, config.malicious_count());
    assign_malicious(world, &malicious);
    malicious
}

/// Spawn `num_drones` drones evenly spaced around the center, each on its
/// own orbit radius drawn from the drone band. Drones rotate forward.
pub fn spawn_drones(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) {
    let count = config.num_drones;
    for index in 0..count {
        let orbit = Orbit {
            radius: draw_radius(rng, config.drone_orbit),
            angle: spaced_angle(index, count),
            angular_step: config.angular_step,
        };
        world.spawn((Drone { index }, orbit, orbit_start(config, &orbit)));
    }
}

/// Spawn enforcement agents the same way, rotating the other way round.
pub fn spawn_enforcement_agents(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) {
    let count = config.num_enforcement_agents;
    for index in 0..count {
        let orbit = Orbit {
            radius: draw_radius(rng, config.agent_orbit),
            angle: spaced_angle(index, count),
            angular_step: -config.angular_step,
        };
        world.spawn((EnforcementAgent { index }, orbit, orbit_start(config, &orbit)));
    }
}

/// Sample `count` distinct drone indices out of `num_drones`, ascending.
pub fn choose_malicious(rng: &mut ChaCha8Rng, num_drones: usize, count: usize) -> Vec<usize> {
    let mut chosen = rand::seq::index::sample(rng, num_drones, count.min(num_drones)).into_vec();
    chosen.sort_unstable();
    chosen
}

/// Make exactly the drones in `indices` malicious.
pub fn assign_malicious(world: &mut World, indices: &[usize]) {
    let drones: Vec<(hecs::Entity, usize)> = world
        .query::<&Drone>()
        .iter()
        .map(|(entity, drone)| (entity, drone.index))
        .collect();

    for (entity, index) in drones {
        if indices.contains(&index) {
            let _ = world.insert_one(entity, Malicious);
        } else {
            let _ = world.remove_one::<Malicious>(entity);
        }
    }
}

/// Spawn a single enemy at `position`.
pub fn spawn_enemy(world: &mut World, serial: u32, position: IVec2) -> hecs::Entity {
    world.spawn((Enemy { serial }, Position(position)))
}

/// Angle of the `index`-th of `count` evenly spaced orbiters, starting at 0.
fn spaced_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64
}

fn draw_radius(rng: &mut ChaCha8Rng, band: OrbitBand) -> f64 {
    f64::from(rng.gen_range(band.min..band.max))
}

fn orbit_start(config: &SimConfig, orbit: &Orbit) -> Position {
    Position(orbit_position(
        config.center(),
        orbit.radius,
        orbit.angle,
        config.map_size,
    ))
}
