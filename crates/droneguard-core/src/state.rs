//! State records handed to callers: per-step observations, results,
//! snapshots for renderers, and the frozen episode outcome.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;

/// What a policy sees after each step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Drone positions in index order.
    pub drones: Vec<IVec2>,
    /// Enemy positions in spawn order.
    pub enemies: Vec<IVec2>,
}

/// Population counts at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub healthy_drones: u32,
    pub malicious_drones: u32,
    pub enforcement_agents: u32,
    /// Cumulative reform events this episode.
    pub reformed_drones: u32,
}

impl Population {
    pub fn total_drones(&self) -> u32 {
        self.healthy_drones + self.malicious_drones
    }
}

/// Extra data returned by `reset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetInfo {
    pub seed: u64,
    /// Indices of the drones that start malicious, ascending.
    pub malicious_drones: Vec<usize>,
}

/// Extra data returned by `step`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Set only on the terminating step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<TerminationReason>,
    pub events: Vec<SimEvent>,
}

/// Everything one call to `step` produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: i32,
    pub terminated: bool,
    /// Always false: the step budget ends the episode as a success.
    pub truncated: bool,
    pub info: StepInfo,
}

impl StepResult {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Immutable summary captured the moment an episode terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeOutcome {
    pub result: EpisodeResult,
    pub reason: TerminationReason,
    pub steps: u64,
    pub duration_secs: f64,
    pub healthy_drones: u32,
    pub malicious_drones: u32,
    pub enforcement_agents: u32,
    pub reformed_drones: u32,
}

/// A drone as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneView {
    pub index: usize,
    pub position: IVec2,
    pub malicious: bool,
}

/// An enforcement agent as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub index: usize,
    pub position: IVec2,
}

/// An enemy as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u32,
    pub position: IVec2,
}

/// Complete visible state, built read-only from the world after a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub step: u64,
    pub phase: EpisodePhase,
    pub map_size: i32,
    pub center: IVec2,
    pub center_radius: f64,
    pub detection_radius: f64,
    pub drones: Vec<DroneView>,
    pub agents: Vec<AgentView>,
    pub enemies: Vec<EnemyView>,
    pub population: Population,
}
