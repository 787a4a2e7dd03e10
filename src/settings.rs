//! Game settings and preferences
//!
//! Read once at startup from an optional JSON block embedded in the host
//! page. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::SoundCue;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Extra gain for the score cue (0.0 - 1.0)
    pub score_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            score_volume: 0.5,
            muted: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Element id of the inline settings block in the host page
    pub const ELEMENT_ID: &'static str = "pong-settings";

    /// Parse settings JSON; unknown keys are ignored, missing keys default
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.clamp_volumes();
        Ok(settings)
    }

    /// Settings from an optional page block, falling back to defaults
    pub fn from_page_block(block: Option<&str>) -> Self {
        let Some(json) = block.map(str::trim).filter(|s| !s.is_empty()) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from page");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings block: {e}");
                Self::default()
            }
        }
    }

    fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.score_volume = self.score_volume.clamp(0.0, 1.0);
    }

    /// Gain a cue should play at
    pub fn cue_volume(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let base = self.master_volume * self.sfx_volume;
        match cue {
            SoundCue::Score => base * self.score_volume,
            SoundCue::WallHit | SoundCue::PaddleHit => base,
        }
    }
}
