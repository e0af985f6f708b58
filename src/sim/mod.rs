//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (spawn order, ids ascending)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::catcher_hit;
pub use input::{PlaySurface, PointerSample, PointerSource};
pub use spawn::spawn_item;
pub use state::{Catcher, FallingItem, GameEvent, GamePhase, GameSession, ItemKind};
pub use tick::tick;
