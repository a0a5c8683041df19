//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Final result of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeResult {
    /// The step budget ran out with the center intact.
    Success,
    /// An enemy reached the center.
    Fail,
}

impl EpisodeResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            EpisodeResult::Success => "success",
            EpisodeResult::Fail => "fail",
        }
    }
}

/// Why a step ended the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    EnemyReachedCenter,
    SimulationSuccess,
}

impl TerminationReason {
    pub fn result(&self) -> EpisodeResult {
        match self {
            TerminationReason::EnemyReachedCenter => EpisodeResult::Fail,
            TerminationReason::SimulationSuccess => EpisodeResult::Success,
        }
    }
}

/// Episode state machine. `Terminated` is absorbing until the next reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    #[default]
    Running,
    Terminated(EpisodeResult),
}

impl EpisodePhase {
    pub fn is_terminated(&self) -> bool {
        matches!(self, EpisodePhase::Terminated(_))
    }
}

/// Boundary edge an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// y = 0
    Top,
    /// y = map_size
    Bottom,
    /// x = 0
    Left,
    /// x = map_size
    Right,
}
