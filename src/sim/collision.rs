//! Catcher collision test
//!
//! A plain tolerance box around the catcher: the vertical bound is inclusive,
//! the horizontal bound is exclusive.

use glam::Vec2;

use crate::tuning::GameConfig;

/// Does an item at `item_pos` land in a catcher at `catcher_pos`?
#[inline]
pub fn catcher_hit(item_pos: Vec2, catcher_pos: Vec2, config: &GameConfig) -> bool {
    let delta = (item_pos - catcher_pos).abs();
    delta.y <= config.hit_half_height && delta.x < config.hit_half_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_box() {
        let config = GameConfig::default();
        let catcher = Vec2::new(50.0, 80.0);
        assert!(catcher_hit(Vec2::new(52.0, 81.0), catcher, &config));
    }

    #[test]
    fn test_miss_horizontal() {
        let config = GameConfig::default();
        let catcher = Vec2::new(50.0, 80.0);
        assert!(!catcher_hit(Vec2::new(62.0, 81.0), catcher, &config));
    }

    #[test]
    fn test_edges() {
        let config = GameConfig::default();
        let catcher = Vec2::new(50.0, 80.0);
        // Vertical edge is inclusive
        assert!(catcher_hit(Vec2::new(50.0, 85.0), catcher, &config));
        assert!(catcher_hit(Vec2::new(50.0, 75.0), catcher, &config));
        assert!(!catcher_hit(Vec2::new(50.0, 85.5), catcher, &config));
        // Horizontal edge is exclusive
        assert!(!catcher_hit(Vec2::new(58.0, 80.0), catcher, &config));
        assert!(!catcher_hit(Vec2::new(42.0, 80.0), catcher, &config));
        assert!(catcher_hit(Vec2::new(57.9, 80.0), catcher, &config));
    }
}
