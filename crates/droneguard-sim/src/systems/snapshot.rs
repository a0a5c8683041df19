//! Snapshot system: queries the ECS world and builds observations,
//! population counts and full renderer snapshots.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use droneguard_core::components::{Drone, EnforcementAgent, Malicious};
use droneguard_core::config::SimConfig;
use droneguard_core::enums::EpisodePhase;
use droneguard_core::state::*;

use crate::roster;

/// Drone and enemy positions, in index and spawn order.
pub fn build_observation(world: &World) -> Observation {
    Observation {
        drones: roster::drones(world).iter().map(|d| d.position).collect(),
        enemies: roster::enemies(world).iter().map(|e| e.position).collect(),
    }
}

/// Current population counts.
pub fn build_population(world: &World, reformed_drones: u32) -> Population {
    let total = world.query::<&Drone>().iter().count() as u32;
    let malicious = world.query::<(&Drone, &Malicious)>().iter().count() as u32;
    let agents = world.query::<&EnforcementAgent>().iter().count() as u32;

    Population {
        healthy_drones: total - malicious,
        malicious_drones: malicious,
        enforcement_agents: agents,
        reformed_drones,
    }
}

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    config: &SimConfig,
    step: u64,
    phase: EpisodePhase,
    reformed_drones: u32,
) -> WorldSnapshot {
    WorldSnapshot {
        step,
        phase,
        map_size: config.map_size,
        center: config.center(),
        center_radius: config.center_radius,
        detection_radius: config.detection_radius,
        drones: roster::drones(world)
            .iter()
            .map(|d| DroneView {
                index: d.index,
                position: d.position,
                malicious: d.malicious,
            })
            .collect(),
        agents: roster::agents(world)
            .iter()
            .map(|a| AgentView {
                index: a.index,
                position: a.position,
            })
            .collect(),
        enemies: roster::enemies(world)
            .iter()
            .map(|e| EnemyView {
                serial: e.serial,
                position: e.position,
            })
            .collect(),
        population: build_population(world, reformed_drones),
    }
}
