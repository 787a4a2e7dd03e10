//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Elapsed time and input arrive as plain values
//! - Randomness comes from the seeded RNG inside `GameState`
//! - Sound is requested through `GameEvent`s, never played directly

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Scene, Score, Side, SoundCue};
pub use tick::{TickInput, tick};
