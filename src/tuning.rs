//! Data-driven game balance
//!
//! Every knob of the simulation lives in [`GameConfig`]. Defaults reproduce the
//! classic game; a JSON document can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance and board geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,
    /// Most spawns one poll may deliver after a stall
    pub max_spawn_catch_up: u32,
    /// Probability (0-1) that a spawned item is a hazard
    pub hazard_chance: f64,
    /// Points per caught safe item
    pub safe_reward: u64,

    // === Spawning ===
    pub spawn_y: f32,
    pub spawn_x_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Items with y at or past this line are culled
    pub cull_y: f32,

    // === Catcher ===
    pub catcher_y: f32,
    pub catcher_min_x: f32,
    pub catcher_max_x: f32,

    // === Hit box ===
    /// Vertical tolerance (inclusive)
    pub hit_half_height: f32,
    /// Horizontal tolerance (exclusive)
    pub hit_half_width: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_spawn_catch_up: MAX_SPAWN_CATCH_UP,
            hazard_chance: HAZARD_CHANCE,
            safe_reward: SAFE_REWARD,

            spawn_y: SPAWN_Y,
            spawn_x_max: SPAWN_X_MAX,
            speed_min: ITEM_MIN_SPEED,
            speed_max: ITEM_MAX_SPEED,
            cull_y: CULL_Y,

            catcher_y: CATCHER_Y,
            catcher_min_x: CATCHER_MIN_X,
            catcher_max_x: CATCHER_MAX_X,

            hit_half_height: HIT_HALF_HEIGHT,
            hit_half_width: HIT_HALF_WIDTH,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Parse a config, falling back to defaults on malformed input
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded game config");
                config
            }
            Some(Err(e)) => {
                log::warn!("Invalid game config ({e}), using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms > 0.0) {
            log::warn!("spawn_interval_ms {} out of range", self.spawn_interval_ms);
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if self.max_spawn_catch_up > CATCH_UP_LIMIT {
            log::warn!(
                "max_spawn_catch_up {} capped at {}",
                self.max_spawn_catch_up, CATCH_UP_LIMIT
            );
        }
        self.max_spawn_catch_up = self.max_spawn_catch_up.clamp(1, CATCH_UP_LIMIT);

        if self.safe_reward > SAFE_REWARD_LIMIT {
            log::warn!("safe_reward {} capped at {}", self.safe_reward, SAFE_REWARD_LIMIT);
            self.safe_reward = SAFE_REWARD_LIMIT;
        }

        if !self.hazard_chance.is_finite() {
            self.hazard_chance = defaults.hazard_chance;
        }
        self.hazard_chance = self.hazard_chance.clamp(0.0, 1.0);

        self.spawn_x_max = finite_or(self.spawn_x_max, defaults.spawn_x_max).clamp(0.0, BOARD_SIZE);
        self.spawn_y = finite_or(self.spawn_y, defaults.spawn_y);
        self.cull_y = finite_or(self.cull_y, defaults.cull_y);

        // Items must always move downward
        self.speed_min = finite_or(self.speed_min, defaults.speed_min);
        self.speed_max = finite_or(self.speed_max, defaults.speed_max);
        if self.speed_min <= 0.0 {
            log::warn!("speed_min {} must be positive", self.speed_min);
            self.speed_min = defaults.speed_min;
        }
        if self.speed_max < self.speed_min {
            std::mem::swap(&mut self.speed_min, &mut self.speed_max);
            self.speed_min = self.speed_min.max(f32::EPSILON);
        }

        self.catcher_y = finite_or(self.catcher_y, defaults.catcher_y);
        self.catcher_min_x = finite_or(self.catcher_min_x, defaults.catcher_min_x);
        self.catcher_max_x = finite_or(self.catcher_max_x, defaults.catcher_max_x);
        if self.catcher_max_x < self.catcher_min_x {
            log::warn!("catcher range inverted, swapping bounds");
            std::mem::swap(&mut self.catcher_min_x, &mut self.catcher_max_x);
        }

        self.hit_half_height = finite_or(self.hit_half_height, defaults.hit_half_height).abs();
        self.hit_half_width = finite_or(self.hit_half_width, defaults.hit_half_width).abs();

        self
    }

    /// Clamp an x coordinate into the catcher's travel range
    #[inline]
    pub fn clamp_catcher_x(&self, x: f32) -> f32 {
        x.clamp(self.catcher_min_x, self.catcher_max_x)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
