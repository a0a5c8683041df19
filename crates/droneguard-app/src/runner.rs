//! Episode runner: drives engines with no-op actions until they terminate.
//!
//! Each run gets its own engine seeded from the base seed plus the run
//! number, so a batch is reproducible and runs are independent.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use droneguard_core::commands::hold_all;
use droneguard_core::enums::EpisodeResult;
use droneguard_core::error::SimError;
use droneguard_core::state::EpisodeOutcome;
use droneguard_sim::engine::{SimConfig, SimulationEngine};

/// One finished run, as written to the output stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run: u32,
    pub seed: u64,
    pub enforcement_agents: usize,
    pub outcome: EpisodeOutcome,
}

/// Aggregate over a batch of runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: u32,
    pub successes: u32,
    pub failures: u32,
    pub total_steps: u64,
    pub reformed_drones: u64,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &EpisodeOutcome) {
        self.runs += 1;
        match outcome.result {
            EpisodeResult::Success => self.successes += 1,
            EpisodeResult::Fail => self.failures += 1,
        }
        self.total_steps += outcome.steps;
        self.reformed_drones += u64::from(outcome.reformed_drones);
    }

    pub fn mean_steps(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_steps as f64 / f64::from(self.runs)
    }

    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.runs)
    }
}

/// Step `engine` with hold actions until its episode ends.
pub fn run_episode(engine: &mut SimulationEngine) -> Result<EpisodeOutcome, SimError> {
    let actions = hold_all(engine.config().num_drones);
    loop {
        engine.step(&actions)?;
        if let Some(outcome) = engine.outcome() {
            return Ok(outcome.clone());
        }
    }
}

/// Lazily runs `runs` episodes, numbered from 1.
pub struct BatchRunner {
    base: SimConfig,
    runs: u32,
    next_run: u32,
}

impl BatchRunner {
    pub fn new(base: SimConfig, runs: u32) -> Self {
        Self {
            base,
            runs,
            next_run: 1,
        }
    }

    fn run_one(&self, run: u32) -> Result<RunRecord, SimError> {
        let seed = self.base.seed.wrapping_add(u64::from(run));
        let config = SimConfig {
            seed,
            ..self.base.clone()
        };
        let mut engine = SimulationEngine::new(config)?;
        let outcome = run_episode(&mut engine)?;
        info!(
            run,
            result = outcome.result.as_str(),
            steps = outcome.steps,
            "run complete"
        );
        Ok(RunRecord {
            run,
            seed,
            enforcement_agents: self.base.num_enforcement_agents,
            outcome,
        })
    }
}

impl Iterator for BatchRunner {
    type Item = Result<RunRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_run > self.runs {
            return None;
        }
        let run = self.next_run;
        self.next_run += 1;
        Some(self.run_one(run))
    }
}

/// Load a JSON configuration file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}
