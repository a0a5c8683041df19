//! Simulation engine for droneguard.
//!
//! Owns the hecs ECS world, runs systems once per step,
//! and produces observations, snapshots and episode outcomes.

pub mod engine;
pub mod roster;
pub mod systems;
pub mod world_setup;

pub use droneguard_core as core;
pub use engine::{SimConfig, SimulationEngine};
