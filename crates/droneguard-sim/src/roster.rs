//! Ordered read-only views over the ECS world.
//!
//! hecs iterates in archetype order, which shifts when a drone gains or
//! loses the `Malicious` marker. Every rule that depends on "first drone" or
//! "first enemy" goes through these helpers so ordering is by index or
//! spawn serial regardless of storage layout.

use glam::IVec2;
use hecs::{Entity, World};

use droneguard_core::components::{Drone, Enemy, EnforcementAgent, Malicious};
use droneguard_core::types::Position;

#[derive(Debug, Clone, Copy)]
pub struct DroneSlot {
    pub entity: Entity,
    pub index: usize,
    pub position: IVec2,
    pub malicious: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct AgentSlot {
    pub entity: Entity,
    pub index: usize,
    pub position: IVec2,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemySlot {
    pub entity: Entity,
    pub serial: u32,
    pub position: IVec2,
}

/// All drones in index order.
pub fn drones(world: &World) -> Vec<DroneSlot> {
    let mut slots: Vec<DroneSlot> = world
        .query::<(&Drone, &Position, Option<&Malicious>)>()
        .iter()
        .map(|(entity, (drone, pos, malicious))| DroneSlot {
            entity,
            index: drone.index,
            position: pos.0,
            malicious: malicious.is_some(),
        })
        .collect();
    slots.sort_by_key(|s| s.index);
    slots
}

/// All enforcement agents in index order.
pub fn agents(world: &World) -> Vec<AgentSlot> {
    let mut slots: Vec<AgentSlot> = world
        .query::<(&EnforcementAgent, &Position)>()
        .iter()
        .map(|(entity, (agent, pos))| AgentSlot {
            entity,
            index: agent.index,
            position: pos.0,
        })
        .collect();
    slots.sort_by_key(|s| s.index);
    slots
}

/// All active enemies in spawn order.
pub fn enemies(world: &World) -> Vec<EnemySlot> {
    let mut slots: Vec<EnemySlot> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| EnemySlot {
            entity,
            serial: enemy.serial,
            position: pos.0,
        })
        .collect();
    slots.sort_by_key(|s| s.serial);
    slots
}

/// Indices of malicious drones, ascending.
pub fn malicious_indices(world: &World) -> Vec<usize> {
    let mut indices: Vec<usize> = world
        .query::<(&Drone, &Malicious)>()
        .iter()
        .map(|(_, (drone, _))| drone.index)
        .collect();
    indices.sort_unstable();
    indices
}
