//! Core types and definitions for the droneguard simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, actions, geometry, configuration, errors, events, state
//! snapshots and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
