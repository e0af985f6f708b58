//! Plate Catch - catch the falling plates, dodge the bombs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling items, collisions, session state)
//! - `schedule`: Tick sources driving spawn cadence and per-frame updates
//! - `game`: Game loop owning the session and its tick sources
//! - `ui`: Dialog host control and view model
//! - `notify`: Transient notification sink
//! - `platform`: Browser wiring (wasm32 only)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod notify;
pub mod platform;
pub mod schedule;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::GameLoop;
pub use tuning::GameConfig;

/// Game configuration constants
///
/// The board is measured in percent of the play surface: x grows to the right,
/// y grows downward, both span 0..100.
pub mod consts {
    /// Board extent on both axes
    pub const BOARD_SIZE: f32 = 100.0;

    /// Spawn cadence (milliseconds between new items)
    pub const SPAWN_INTERVAL_MS: f64 = 800.0;
    /// Most spawns delivered by one poll after a stall
    pub const MAX_SPAWN_CATCH_UP: u32 = 4;
    /// Upper bound accepted for a configured catch-up
    pub const CATCH_UP_LIMIT: u32 = 64;
    /// Probability that a spawned item is a bomb
    pub const HAZARD_CHANCE: f64 = 0.3;

    /// New items start just above the visible board
    pub const SPAWN_Y: f32 = -5.0;
    /// Spawn x is drawn from 0..=SPAWN_X_MAX
    pub const SPAWN_X_MAX: f32 = 90.0;
    /// Fall speed range (board percent per frame)
    pub const ITEM_MIN_SPEED: f32 = 1.0;
    pub const ITEM_MAX_SPEED: f32 = 3.0;
    /// Items at or below this line have left the board
    pub const CULL_Y: f32 = 100.0;

    /// Catcher defaults - basket rides a fixed line near the bottom
    pub const CATCHER_START_X: f32 = 50.0;
    pub const CATCHER_Y: f32 = 80.0;
    pub const CATCHER_MIN_X: f32 = 5.0;
    pub const CATCHER_MAX_X: f32 = 95.0;

    /// Hit box: |dy| <= HIT_HALF_HEIGHT and |dx| < HIT_HALF_WIDTH
    pub const HIT_HALF_HEIGHT: f32 = 5.0;
    pub const HIT_HALF_WIDTH: f32 = 8.0;

    /// Points per caught plate
    pub const SAFE_REWARD: u64 = 10;
    /// Upper bound accepted for a configured reward
    pub const SAFE_REWARD_LIMIT: u64 = 1_000_000;
}

