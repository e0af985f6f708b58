//! Demo mode - a simple catcher AI
//!
//! Chases the plate that will reach the catcher line soonest and sidesteps any
//! bomb that is about to land on top of it. Good enough to keep a demo running;
//! not meant to be unbeatable.

use super::state::{GameSession, ItemKind};
use crate::tuning::GameConfig;

/// How many ticks ahead a bomb counts as a threat
const THREAT_HORIZON_TICKS: f32 = 6.0;
/// Extra clearance kept from a threatening bomb
const DODGE_MARGIN: f32 = 2.0;

/// Pick a target catcher x for this frame, or `None` to stay put
pub fn target_x(session: &GameSession, config: &GameConfig) -> Option<f32> {
    if !session.is_playing() {
        return None;
    }

    let catcher = session.catcher.pos;
    let line = catcher.y;

    // Ticks until an item crosses into the catch band (None once it has passed)
    let ticks_to_line = |y: f32, speed: f32| -> Option<f32> {
        let remaining = line - config.hit_half_height - y;
        if y > line + config.hit_half_height {
            None
        } else {
            Some((remaining / speed).max(0.0))
        }
    };

    let plate = session
        .items
        .iter()
        .filter(|item| item.kind == ItemKind::Safe)
        .filter_map(|item| ticks_to_line(item.pos.y, item.speed).map(|t| (t, item.pos.x)))
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, x)| x);

    let mut target = plate.unwrap_or(catcher.x);

    // Dodge bombs that will land within the horizon near the target
    let dodge_width = config.hit_half_width + DODGE_MARGIN;
    for bomb in session.items.iter().filter(|item| item.kind == ItemKind::Hazard) {
        let Some(t) = ticks_to_line(bomb.pos.y, bomb.speed) else {
            continue;
        };
        if t > THREAT_HORIZON_TICKS {
            continue;
        }
        let dx = target - bomb.pos.x;
        if dx.abs() < dodge_width {
            let side = if dx >= 0.0 { 1.0 } else { -1.0 };
            let candidate = bomb.pos.x + side * dodge_width;
            // Dodge the other way if the wall is in the way
            target = if (config.catcher_min_x..=config.catcher_max_x).contains(&candidate) {
                candidate
            } else {
                bomb.pos.x - side * dodge_width
            };
        }
    }

    Some(config.clamp_catcher_x(target))
}
