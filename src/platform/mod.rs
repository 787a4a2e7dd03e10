//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (`clock`)
//! - Input events (`input`)
//! - Canvases and the text overlay (`web`, wasm32 only)

pub mod clock;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FrameClock;
pub use input::{Action, Keyboard};
