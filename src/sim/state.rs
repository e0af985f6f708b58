//! Game state and core simulation types
//!
//! Everything a session owns lives here: items, catcher, score, phase, the id
//! allocator and the seeded RNG. Nothing is held at process scope.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::CATCHER_START_X;
use crate::tuning::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// A hazard was caught
    Over,
}

/// What kind of object is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A plate - catch it for points
    Safe,
    /// A bomb - catching it ends the game
    Hazard,
}

impl ItemKind {
    /// Glyph drawn on the board
    pub fn glyph(&self) -> &'static str {
        match self {
            ItemKind::Safe => "🍽️",
            ItemKind::Hazard => "💣",
        }
    }
}

/// A falling item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u64,
    /// Board position (percent), x fixed at spawn
    pub pos: Vec2,
    /// Board percent per tick
    pub speed: f32,
    pub kind: ItemKind,
}

impl FallingItem {
    /// Advance one tick
    #[inline]
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }
}

/// The player's basket
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Catcher {
    pub pos: Vec2,
}

impl Catcher {
    pub const GLYPH: &'static str = "🧺";

    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.clamp_catcher_x(CATCHER_START_X), config.catcher_y),
        }
    }

    /// Move horizontally, clamped to the travel range
    pub fn move_to(&mut self, x: f32, config: &GameConfig) {
        if x.is_finite() {
            self.pos.x = config.clamp_catcher_x(x);
        } else {
            log::trace!("Ignoring non-finite catcher x");
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A safe item landed in the basket
    Caught { id: u64, points: u64 },
    /// A hazard landed in the basket; the session is over
    HazardCaught { id: u64 },
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Seed the session was created with
    pub seed: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub catcher: Catcher,
    /// Active items in spawn order (ids ascending)
    pub items: Vec<FallingItem>,
    /// Ticks processed since the last start
    pub time_ticks: u64,
    /// Number of starts (first start included)
    pub runs: u32,
    /// Next item id; survives restarts so ids are never reused
    pub(crate) next_id: u64,
    #[serde(skip, default = "fresh_rng")]
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            score: 0,
            phase: GamePhase::Idle,
            catcher: Catcher::new(config),
            items: Vec::new(),
            time_ticks: 0,
            runs: 0,
            next_id: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Enter `Playing` with a clean slate. Used for both start and restart.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Playing {
            log::debug!("Restarting a session that is still playing");
        }
        self.score = 0;
        self.items.clear();
        self.time_ticks = 0;
        self.runs += 1;
        self.phase = GamePhase::Playing;
        log::info!("Session started (run {})", self.runs);
    }

    /// End the run. Score is frozen from here on.
    pub fn end(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Over;
            log::info!("Game over - final score {}", self.score);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Allocate a new item id. `None` once the id space is used up; ids are
    /// never handed out twice.
    pub fn next_item_id(&mut self) -> Option<u64> {
        let id = self.next_id;
        let Some(next) = id.checked_add(1) else {
            log::warn!("Item id space exhausted");
            return None;
        };
        self.next_id = next;
        Some(id)
    }

    /// Peek at the id the next spawn will receive
    pub fn peek_item_id(&self) -> u64 {
        self.next_id
    }

    /// A new idle session that keeps this one's id sequence and RNG stream.
    /// Used when the dialog closes and the old session is discarded.
    pub fn fresh(&self, config: &GameConfig) -> Self {
        Self {
            seed: self.seed,
            score: 0,
            phase: GamePhase::Idle,
            catcher: Catcher::new(config),
            items: Vec::new(),
            time_ticks: 0,
            runs: 0,
            next_id: self.next_id,
            rng: self.rng.clone(),
        }
    }

    /// Move the catcher (input mapper output)
    pub fn move_catcher(&mut self, x: f32, config: &GameConfig) {
        self.catcher.move_to(x, config);
    }
}
