//! Pong - two players, one ball, first to five
//!
//! Core modules:
//! - `sim`: Game-flow state machine, paddle movement, ball physics and collisions
//! - `ui`: Per-phase draw lists (rectangles and centred text)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Keyboard state and frame clock
//! - `settings`: Startup preferences (volume, FPS overlay)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{SettingsError, StartupError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Pong";

    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Frame rate the loop aims for
    pub const TARGET_FPS: u32 = 60;
    /// Largest elapsed time handed to a single tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Points needed to win a match
    pub const WIN_POINTS: u32 = 5;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 86.0;
    /// Paddle speed in pixels per second
    pub const PADDLE_SPEED: f32 = 650.0;
    /// Paddle distance from the side borders
    pub const LATERAL_DISTANCE: f32 = 50.0;

    /// Ball edge length (the ball is square)
    pub const BALL_SIZE: i32 = 15;
    /// Serve speed per axis, inclusive range (pixels per second)
    pub const SERVE_SPEED_MIN: i32 = 400;
    pub const SERVE_SPEED_MAX: i32 = 500;

    /// Vertical speed multiplier on a wall bounce
    pub const WALL_BOUNCE: f32 = 1.03;
    /// Horizontal speed multiplier on a paddle hit
    pub const PADDLE_BOOST: f32 = 1.1;
}
