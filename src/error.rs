//! Error types for startup and settings loading
//!
//! The simulation itself is total; only collaborators can fail, and they do
//! so before the game loop begins.

use thiserror::Error;

/// Failure while bringing up the window, canvases or GPU
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("2D context unavailable on #{0}")]
    NoTextContext(&'static str),
    #[error("failed to create surface")]
    CreateSurface(#[source] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter")]
    RequestAdapter(#[source] wgpu::RequestAdapterError),
    #[error("failed to create GPU device")]
    RequestDevice(#[source] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Failure while reading the settings block
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings JSON")]
    Parse(#[from] serde_json::Error),
}
