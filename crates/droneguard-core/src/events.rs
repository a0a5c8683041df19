//! Events emitted by the simulation for loggers and renderers.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Edge;

/// Something noteworthy that happened during a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new enemy entered at the boundary.
    EnemySpawned { enemy: u32, edge: Edge, position: IVec2 },
    /// A healthy drone caught an enemy and removed it.
    EnemyNeutralized {
        enemy: u32,
        drone: usize,
        position: IVec2,
    },
    /// An enforcement agent caught a malicious drone near an enemy.
    DroneReformed { drone: usize, agent: usize },
    /// An enemy got inside the center radius.
    Breach { enemy: u32, position: IVec2 },
}
