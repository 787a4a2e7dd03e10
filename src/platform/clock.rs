//! Frame clock
//!
//! Animation frames arrive at the display's refresh rate. The clock turns
//! their timestamps into game ticks at the target rate and reports the
//! elapsed time each tick should simulate.

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

/// Frames may arrive this much early and still count as a tick
const EARLY_TOLERANCE_MS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last_tick_ms: Option<f64>,
    /// Deadline of the next tick; advances in whole intervals so leftover
    /// time carries over between frames
    next_tick_ms: f64,
    // FPS tracking
    tick_times: [f64; 60],
    tick_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(1) as f64,
            last_tick_ms: None,
            next_tick_ms: 0.0,
            tick_times: [0.0; 60],
            tick_index: 0,
            fps: 0,
        }
    }

    /// Feed an animation-frame timestamp (ms). Returns the seconds to
    /// simulate when this frame is a tick, `None` when it should be skipped.
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            self.next_tick_ms = now_ms + self.interval_ms;
            self.record(now_ms);
            return Some(1.0 / TARGET_FPS as f32);
        };

        if now_ms + EARLY_TOLERANCE_MS < self.next_tick_ms {
            return None;
        }

        let elapsed = ((now_ms - last) / 1000.0) as f32;
        let dt = if elapsed > MAX_FRAME_DT {
            // Tab switch or stall: start a fresh schedule from here
            self.next_tick_ms = now_ms + self.interval_ms;
            MAX_FRAME_DT
        } else {
            // Never bank more than one late tick
            self.next_tick_ms = (self.next_tick_ms + self.interval_ms).max(now_ms);
            elapsed
        };

        self.last_tick_ms = Some(now_ms);
        self.record(now_ms);
        Some(dt)
    }

    /// Ticks per second over the last 60 ticks
    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn record(&mut self, now_ms: f64) {
        let len = self.tick_times.len();
        self.tick_times[self.tick_index] = now_ms;
        self.tick_index = (self.tick_index + 1) % len;

        // Slot after the newest holds the oldest sample
        let oldest = self.tick_times[self.tick_index];
        if oldest > 0.0 {
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((len - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_one_target_step() {
        let mut clock = FrameClock::default();
        let dt = clock.advance(1000.0).unwrap();
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    }

    /// Ticks produced by one second of frames at `refresh_hz`
    fn ticks_in_one_second(refresh_hz: f64) -> usize {
        let mut clock = FrameClock::default();
        let frame_ms = 1000.0 / refresh_hz;
        (0..refresh_hz.round() as usize)
            .filter(|&i| clock.advance(1000.0 + i as f64 * frame_ms).is_some())
            .count()
    }

    #[test]
    fn test_tick_rate_holds_on_any_refresh_rate() {
        for hz in [60.0, 75.0, 90.0, 120.0, 144.0, 165.0] {
            let ticks = ticks_in_one_second(hz);
            assert!((58..=61).contains(&ticks), "{hz} Hz gave {ticks} ticks");
        }
    }

    #[test]
    fn test_fast_display_skips_frames() {
        let mut clock = FrameClock::default();
        clock.advance(1000.0);
        // 144 Hz display: ~6.9 ms per frame
        assert!(clock.advance(1006.9).is_none());
        assert!(clock.advance(1013.8).is_none());
        let dt = clock.advance(1020.7).unwrap();
        assert!((dt - 0.0207).abs() < 1e-4);
        // Leftover time carries: the next deadline is 1033.3, not 1037.4
        assert!(clock.advance(1027.6).is_none());
        assert!(clock.advance(1034.5).is_some());
    }

    #[test]
    fn test_slightly_early_frame_still_ticks() {
        let mut clock = FrameClock::default();
        clock.advance(0.5);
        assert!(clock.advance(16.5).is_some());
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::default();
        clock.advance(1000.0);
        let dt = clock.advance(6000.0).unwrap();
        assert_eq!(dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_no_burst_after_long_gap() {
        let mut clock = FrameClock::default();
        clock.advance(1000.0);
        clock.advance(6000.0);
        // Schedule restarts at the resumed frame
        assert!(clock.advance(6005.0).is_none());
        assert!(clock.advance(6016.7).is_some());
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::default();
        let mut t = 1000.0;
        for _ in 0..120 {
            clock.advance(t);
            t += 1000.0 / 60.0;
        }
        assert!((59..=61).contains(&clock.fps()), "fps {}", clock.fps());
    }
}
