//! Simulation constants and tuning parameters.

// --- Map ---

/// Default side length of the square map (grid units).
pub const DEFAULT_MAP_SIZE: i32 = 120;

/// Default radius around the map center that must stay clear of enemies.
pub const DEFAULT_CENTER_RADIUS: f64 = 5.0;

// --- Detection ---

/// Default distance within which one entity perceives another (inclusive).
pub const DEFAULT_DETECTION_RADIUS: f64 = 10.0;

// --- Population ---

/// Default drone count.
pub const DEFAULT_NUM_DRONES: usize = 5;

/// Default initial enemy count. Informational only; enemies are spawned
/// by the spawner during the episode.
pub const DEFAULT_NUM_ENEMIES: usize = 1;

/// Default enforcement agent count.
pub const DEFAULT_NUM_ENFORCEMENT_AGENTS: usize = 0;

/// One in this many drones starts malicious (at least one always does).
pub const MALICIOUS_DRONE_DIVISOR: usize = 5;

// --- Orbits ---

/// Radians added to a drone's orbital angle each step. Enforcement agents
/// rotate by the same magnitude in the opposite sense.
pub const DEFAULT_ANGULAR_STEP: f64 = 0.05;

/// Drone orbit radius band, half-open.
pub const DRONE_ORBIT_MIN: i32 = 20;
pub const DRONE_ORBIT_MAX: i32 = 30;

/// Enforcement agent orbit radius band, half-open.
pub const AGENT_ORBIT_MIN: i32 = 18;
pub const AGENT_ORBIT_MAX: i32 = 27;

// --- Enemies ---

/// Enemies spawn once every this many steps.
pub const DEFAULT_SPAWN_INTERVAL: u64 = 15;

/// Grid units an enemy covers per step before rounding.
pub const ENEMY_SPEED: f64 = 1.0;

/// Added to the direction norm so an enemy sitting on its target does not
/// divide by zero.
pub const ADVANCE_EPSILON: f64 = 1e-5;

// --- Episode ---

/// Steps an episode must survive to count as a success.
pub const DEFAULT_MAX_STEPS: u64 = 1200;

/// Reward for a step that ends with an enemy inside the center radius.
pub const BREACH_REWARD: i32 = -100;

/// Reward for the step that exhausts the step budget without a breach.
pub const SUCCESS_REWARD: i32 = 100;

/// Reward for every non-terminal step.
pub const STEP_REWARD: i32 = 0;

/// Number of distinct per-drone action codes.
pub const ACTION_COUNT: u8 = 5;
