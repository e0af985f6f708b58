//! Per-frame simulation tick
//!
//! Advance, collide, cull - in that order, once per animation frame.

use super::collision::catcher_hit;
use super::state::{GameEvent, GameSession, ItemKind};
use crate::tuning::GameConfig;

/// Advance the session by one frame.
///
/// Every item is evaluated against the catcher in spawn order within the same
/// pass. A hazard ends the session but safe catches from the same pass still
/// score. Returns the events produced, in evaluation order.
pub fn tick(session: &mut GameSession, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_playing() {
        return events;
    }

    session.time_ticks += 1;

    for item in &mut session.items {
        item.fall();
    }

    // Catcher is read after the fall so both sides belong to this tick
    let catcher_pos = session.catcher.pos;
    let mut consumed: Vec<u64> = Vec::new();
    let mut hazard_hit = false;

    for item in &session.items {
        if !catcher_hit(item.pos, catcher_pos, config) {
            continue;
        }
        match item.kind {
            ItemKind::Safe => {
                session.score = session.score.saturating_add(config.safe_reward);
                consumed.push(item.id);
                events.push(GameEvent::Caught {
                    id: item.id,
                    points: config.safe_reward,
                });
                log::debug!("Caught plate #{} (score {})", item.id, session.score);
            }
            ItemKind::Hazard => {
                hazard_hit = true;
                events.push(GameEvent::HazardCaught { id: item.id });
                log::debug!("Caught bomb #{}", item.id);
            }
        }
    }

    // Cull caught plates and anything that fell off the board
    let cull_y = config.cull_y;
    session
        .items
        .retain(|item| item.pos.y < cull_y && !consumed.contains(&item.id));

    if hazard_hit {
        session.end();
    }

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::sim::spawn::spawn_item;
    use crate::sim::state::{FallingItem, GamePhase};

    fn playing(config: &GameConfig) -> GameSession {
        let mut session = GameSession::new(12345, config);
        session.start();
        session
    }

    fn drop_item(session: &mut GameSession, x: f32, y: f32, speed: f32, kind: ItemKind) -> u64 {
        let id = session.next_item_id().unwrap();
        session.items.push(FallingItem {
            id,
            pos: Vec2::new(x, y),
            speed,
            kind,
        });
        id
    }

    #[test]
    fn test_items_fall_by_speed() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        drop_item(&mut session, 10.0, -5.0, 2.5, ItemKind::Safe);
        tick(&mut session, &config);
        assert_eq!(session.items[0].pos.y, -2.5);
        tick(&mut session, &config);
        assert_eq!(session.items[0].pos.y, 0.0);
        assert_eq!(session.time_ticks, 2);
    }

    #[test]
    fn test_collision_uses_post_fall_position() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        // Starts out of range (y=73), lands at 81 after the fall
        let id = drop_item(&mut session, 52.0, 73.0, 8.0, ItemKind::Safe);
        let events = tick(&mut session, &config);
        assert_eq!(events, vec![GameEvent::Caught { id, points: 10 }]);
        assert_eq!(session.score, 10);
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_miss_keeps_item() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        drop_item(&mut session, 62.0, 80.0, 1.0, ItemKind::Hazard);
        let events = tick(&mut session, &config);
        assert!(events.is_empty());
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.items.len(), 1);
    }

    #[test]
    fn test_three_plates_score_thirty() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        for _ in 0..3 {
            drop_item(&mut session, 50.0, 79.0, 1.0, ItemKind::Safe);
            tick(&mut session, &config);
        }
        assert_eq!(session.score, 30);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_hazard_ends_and_freezes() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        session.score = 40;
        let bomb = drop_item(&mut session, 48.0, 78.0, 1.0, ItemKind::Hazard);
        let events = tick(&mut session, &config);
        assert_eq!(events, vec![GameEvent::HazardCaught { id: bomb }]);
        assert_eq!(session.phase, GamePhase::Over);

        // Nothing moves or scores once over
        drop_item(&mut session, 50.0, 79.0, 1.0, ItemKind::Safe);
        let before: Vec<f32> = session.items.iter().map(|i| i.pos.y).collect();
        assert!(tick(&mut session, &config).is_empty());
        let after: Vec<f32> = session.items.iter().map(|i| i.pos.y).collect();
        assert_eq!(before, after);
        assert_eq!(session.score, 40);
    }

    #[test]
    fn test_safe_and_hazard_same_tick() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        let plate_a = drop_item(&mut session, 49.0, 79.0, 1.0, ItemKind::Safe);
        let bomb = drop_item(&mut session, 51.0, 79.0, 1.0, ItemKind::Hazard);
        let plate_b = drop_item(&mut session, 53.0, 79.0, 1.0, ItemKind::Safe);

        let events = tick(&mut session, &config);
        assert_eq!(
            events,
            vec![
                GameEvent::Caught { id: plate_a, points: 10 },
                GameEvent::HazardCaught { id: bomb },
                GameEvent::Caught { id: plate_b, points: 10 },
            ]
        );
        assert_eq!(session.phase, GamePhase::Over);
        assert_eq!(session.score, 20);
        // Caught plates are gone; the bomb stays where it was caught
        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].id, bomb);
    }

    #[test]
    fn test_cull_off_board() {
        let config = GameConfig::default();
        let mut session = playing(&config);
        drop_item(&mut session, 10.0, 98.0, 2.0, ItemKind::Safe);
        drop_item(&mut session, 10.0, 97.0, 2.0, ItemKind::Safe);
        tick(&mut session, &config);
        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].pos.y, 99.0);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_no_growth_after_game_over() {
        let config = GameConfig {
            hazard_chance: 1.0,
            ..Default::default()
        };
        let mut session = playing(&config);
        drop_item(&mut session, 50.0, 78.0, 1.0, ItemKind::Hazard);
        tick(&mut session, &config);
        assert_eq!(session.phase, GamePhase::Over);

        let count = session.items.len();
        for _ in 0..10 {
            spawn_item(&mut session, &config);
            tick(&mut session, &config);
        }
        assert_eq!(session.items.len(), count);
    }

    #[test]
    fn test_score_saturates() {
        let config = GameConfig {
            safe_reward: u64::MAX,
            ..Default::default()
        };
        let mut session = playing(&config);
        for _ in 0..2 {
            drop_item(&mut session, 50.0, 79.0, 1.0, ItemKind::Safe);
            tick(&mut session, &config);
        }
        assert_eq!(session.score, u64::MAX);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_idle_does_not_tick() {
        let config = GameConfig::default();
        let mut session = GameSession::new(1, &config);
        assert!(tick(&mut session, &config).is_empty());
        assert_eq!(session.time_ticks, 0);
    }

    proptest! {
        #[test]
        fn prop_items_stay_on_board(
            seed in any::<u64>(),
            catcher_moves in proptest::collection::vec(-50.0f32..150.0, 1..200),
        ) {
            let config = GameConfig::default();
            let mut session = GameSession::new(seed, &config);
            session.start();
            for (frame, x) in catcher_moves.iter().enumerate() {
                if frame % 3 == 0 {
                    spawn_item(&mut session, &config);
                }
                session.move_catcher(*x, &config);
                tick(&mut session, &config);

                prop_assert!(session.catcher.pos.x >= 5.0 && session.catcher.pos.x <= 95.0);
                for item in &session.items {
                    prop_assert!(item.pos.y >= -5.0);
                    prop_assert!(item.pos.y < 100.0);
                    prop_assert!(item.pos.x >= 0.0 && item.pos.x <= 100.0);
                }
                if !session.is_playing() {
                    break;
                }
            }
        }

        #[test]
        fn prop_catcher_always_clamped(x in proptest::num::f32::ANY) {
            let config = GameConfig::default();
            let mut session = GameSession::new(0, &config);
            session.move_catcher(x, &config);
            prop_assert!(session.catcher.pos.x >= 5.0 && session.catcher.pos.x <= 95.0);
        }
    }
}
