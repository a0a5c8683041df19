//! droneguard headless runner.
//!
//! Wires the simulation crates into a batch driver: load configuration,
//! run episodes to completion, and report per-run outcome records.

pub mod runner;

pub use droneguard_core as core;
