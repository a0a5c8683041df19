//! ECS systems that operate on the simulation world each step.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They hold no state of their own; everything lives in components.

pub mod breach;
pub mod interception;
pub mod motion;
pub mod reform;
pub mod snapshot;
pub mod spawner;
