//! Simulation engine: the episode controller.
//!
//! `SimulationEngine` owns the hecs ECS world and the episode RNG, runs the
//! systems in order once per step, decides termination and freezes the
//! episode outcome. Completely headless, enabling deterministic testing.

use std::time::Instant;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use droneguard_core::commands::parse_actions;
use droneguard_core::constants::{BREACH_REWARD, STEP_REWARD, SUCCESS_REWARD};
use droneguard_core::enums::{EpisodePhase, EpisodeResult, TerminationReason};
use droneguard_core::error::{ConfigError, SimError};
use droneguard_core::events::SimEvent;
use droneguard_core::state::*;

use crate::roster;
use crate::systems;
use crate::systems::spawner::EnemySpawner;
use crate::world_setup;

pub use droneguard_core::config::SimConfig;

/// The simulation engine. Owns the ECS world and all episode state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    rng: ChaCha8Rng,
    seed: u64,
    step: u64,
    phase: EpisodePhase,
    spawner: EnemySpawner,
    reformed_drones: u32,
    started_at: Instant,
    outcome: Option<EpisodeOutcome>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Validate `config` and start the first episode with `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            seed: config.seed,
            step: 0,
            phase: EpisodePhase::default(),
            spawner: EnemySpawner::new(config.enemies_spawn_interval, config.map_size),
            reformed_drones: 0,
            started_at: Instant::now(),
            outcome: None,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            config,
        };
        engine.reset(None);
        Ok(engine)
    }

    /// Start a new episode.
    ///
    /// With `Some(seed)` the RNG is reseeded first, so two resets with the
    /// same seed produce identical initial states. With `None` the RNG
    /// stream simply continues.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, ResetInfo) {
        if let Some(seed) = seed {
            self.seed = seed;
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        self.world.clear();
        self.step = 0;
        self.phase = EpisodePhase::Running;
        self.spawner.reset();
        self.reformed_drones = 0;
        self.outcome = None;
        self.events.clear();
        self.started_at = Instant::now();

        let malicious = world_setup::setup_episode(&mut self.world, &mut self.rng, &self.config);
        info!(
            seed = self.seed,
            drones = self.config.num_drones,
            agents = self.config.num_enforcement_agents,
            malicious = ?malicious,
            "episode reset"
        );

        let info = ResetInfo {
            seed: self.seed,
            malicious_drones: malicious,
        };
        (self.observation(), info)
    }

    /// Advance the episode by one step.
    ///
    /// `actions` holds one code per drone. They are validated but do not
    /// steer anything: drones follow their orbits.
    pub fn step(&mut self, actions: &[u8]) -> Result<StepResult, SimError> {
        if self.phase.is_terminated() {
            return Err(SimError::EpisodeTerminated { step: self.step });
        }
        parse_actions(actions, self.config.num_drones)?;

        self.step += 1;
        self.run_systems();

        let center = self.config.center();
        let reason = if let Some(enemy) =
            systems::breach::run(&self.world, center, self.config.center_radius)
        {
            self.events.push(SimEvent::Breach {
                enemy: enemy.serial,
                position: enemy.position,
            });
            Some(TerminationReason::EnemyReachedCenter)
        } else if self.step >= self.config.max_steps {
            Some(TerminationReason::SimulationSuccess)
        } else {
            None
        };

        let reward = match reason {
            Some(TerminationReason::EnemyReachedCenter) => BREACH_REWARD,
            Some(TerminationReason::SimulationSuccess) => SUCCESS_REWARD,
            None => STEP_REWARD,
        };
        if let Some(reason) = reason {
            self.terminate(reason);
        }

        trace!(step = self.step, reward, events = self.events.len(), "step");
        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminated: reason.is_some(),
            truncated: false,
            info: StepInfo {
                reason,
                events: std::mem::take(&mut self.events),
            },
        })
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let center = self.config.center();
        let radius = self.config.detection_radius;

        // 1. Motion
        systems::motion::run(&mut self.world, center, self.config.map_size);
        // 2. Interaction: enemy removal, then reform against the survivors
        systems::interception::run(
            &mut self.world,
            radius,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        self.reformed_drones += systems::reform::run(&mut self.world, radius, &mut self.events);
        // 3. Spawning on cadence
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            self.step,
            &mut self.events,
        );
    }

    /// Freeze the outcome record. Only ever called once per episode.
    fn terminate(&mut self, reason: TerminationReason) {
        let result = reason.result();
        let population = self.population();
        let outcome = EpisodeOutcome {
            result,
            reason,
            steps: self.step,
            duration_secs: self.started_at.elapsed().as_secs_f64(),
            healthy_drones: population.healthy_drones,
            malicious_drones: population.malicious_drones,
            enforcement_agents: population.enforcement_agents,
            reformed_drones: population.reformed_drones,
        };
        info!(
            result = result.as_str(),
            steps = outcome.steps,
            duration_secs = outcome.duration_secs,
            healthy = outcome.healthy_drones,
            malicious = outcome.malicious_drones,
            reformed = outcome.reformed_drones,
            "episode terminated"
        );
        self.phase = EpisodePhase::Terminated(result);
        self.outcome = Some(outcome);
    }

    /// Current drone and enemy positions.
    pub fn observation(&self) -> Observation {
        systems::snapshot::build_observation(&self.world)
    }

    /// Current population counts.
    pub fn population(&self) -> Population {
        systems::snapshot::build_population(&self.world, self.reformed_drones)
    }

    /// Full read-only view for renderers.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.config,
            self.step,
            self.phase,
            self.reformed_drones,
        )
    }

    /// The frozen outcome, once the episode has terminated.
    pub fn outcome(&self) -> Option<&EpisodeOutcome> {
        self.outcome.as_ref()
    }

    /// Result of the finished episode, if any.
    pub fn result(&self) -> Option<EpisodeResult> {
        self.outcome.as_ref().map(|o| o.result)
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken this episode.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed the current episode's RNG stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cumulative reform events this episode.
    pub fn reformed_drones(&self) -> u32 {
        self.reformed_drones
    }

    /// Indices of currently malicious drones, ascending.
    pub fn malicious_drones(&self) -> Vec<usize> {
        roster::malicious_indices(&self.world)
    }

    /// Enemies spawned so far this episode.
    pub fn enemies_spawned(&self) -> u32 {
        self.spawner.spawned()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an enemy at a fixed point (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: glam::IVec2) -> Entity {
        self.spawner.spawn_at(&mut self.world, position).1
    }

    /// Override which drones are malicious (for testing).
    #[cfg(test)]
    pub fn set_malicious(&mut self, indices: &[usize]) {
        world_setup::assign_malicious(&mut self.world, indices);
    }

    /// Mutable access to the ECS world (for tests that pin orbits).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
