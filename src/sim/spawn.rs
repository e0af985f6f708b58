//! Item spawning
//!
//! Called once per spawn-timer firing. All randomness comes from the session's
//! seeded RNG so a seed replays the same sequence of drops.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingItem, GameSession, ItemKind};
use crate::tuning::GameConfig;

/// Drop one new item at the top of the board.
///
/// Returns the new item's id, or `None` when the session is not playing or
/// the id space is used up.
pub fn spawn_item(session: &mut GameSession, config: &GameConfig) -> Option<u64> {
    if !session.is_playing() {
        return None;
    }
    let id = session.next_item_id()?;

    let x = session.rng.random_range(0.0..=config.spawn_x_max);
    let speed = session.rng.random_range(config.speed_min..=config.speed_max);
    let kind = if session.rng.random_bool(config.hazard_chance) {
        ItemKind::Hazard
    } else {
        ItemKind::Safe
    };

    session.items.push(FallingItem {
        id,
        pos: Vec2::new(x, config.spawn_y),
        speed,
        kind,
    });
    log::trace!("Spawned {:?} #{} at x={:.1} speed={:.2}", kind, id, x, speed);
    Some(id)
}
