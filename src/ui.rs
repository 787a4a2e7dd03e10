//! Per-phase draw lists
//!
//! Drawing reads the game state and never changes it. Each scene turns into
//! a flat list of rectangles and text runs that the renderer and the text
//! overlay consume.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, Rect, Scene};

/// Colors for game elements
pub mod colors {
    pub const FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const NET: [f32; 4] = [1.0, 1.0, 1.0, 0.25];
    pub const HUD: [f32; 4] = [0.6, 0.9, 0.6, 1.0];
}

/// Text width measurement, supplied by whoever draws the text
pub trait TextMeasure {
    /// Width in pixels of `text` at `size` pixels tall
    fn measure(&self, text: &str, size: f32) -> f32;
}

/// One primitive for the frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    /// `pos` is the top-left corner of the text box
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

/// Dash geometry of the centre net
const NET_DASH: Vec2 = Vec2::new(4.0, 24.0);
const NET_GAP: f32 = 16.0;

/// Build the draw list for the current phase
pub fn compose(state: &GameState, fonts: &impl TextMeasure, fps: Option<u32>) -> Vec<DrawCommand> {
    let mut frame = Vec::new();
    court(&mut frame);

    match state.phase.scene() {
        Scene::Serve => {
            centered_text(&mut frame, fonts, "Press ENTER to start", 150.0, 40.0);
            actors(&mut frame, state);
        }
        Scene::Play => {
            actors(&mut frame, state);
            scores(&mut frame, state, fonts);
        }
        Scene::End => {
            let winner = state.score.leader().player_number();
            centered_text(&mut frame, fonts, &format!("Player {winner} Wins!"), 150.0, 60.0);
            centered_text(&mut frame, fonts, "Press ENTER to play again", 250.0, 40.0);
        }
    }

    if let Some(fps) = fps {
        frame.push(DrawCommand::Text {
            text: format!("{fps} FPS"),
            pos: Vec2::new(10.0, 10.0),
            size: 20.0,
            color: colors::HUD,
        });
    }

    frame
}

fn court(frame: &mut Vec<DrawCommand>) {
    let x = (SCREEN_WIDTH as f32 - NET_DASH.x) / 2.0;
    let mut y = NET_GAP / 2.0;
    while y < SCREEN_HEIGHT as f32 {
        frame.push(DrawCommand::Rect {
            rect: Rect::new(Vec2::new(x, y), NET_DASH),
            color: colors::NET,
        });
        y += NET_DASH.y + NET_GAP;
    }
}

fn actors(frame: &mut Vec<DrawCommand>, state: &GameState) {
    for rect in [state.left.rect(), state.right.rect(), state.ball.rect()] {
        frame.push(DrawCommand::Rect {
            rect,
            color: colors::FOREGROUND,
        });
    }
}

fn scores(frame: &mut Vec<DrawCommand>, state: &GameState, fonts: &impl TextMeasure) {
    let mid = (SCREEN_WIDTH / 2) as f32;
    let left = state.score.left.to_string();
    let width = fonts.measure(&left, 60.0);
    text(frame, left, Vec2::new(mid - (width + 40.0), 150.0), 60.0);
    text(frame, state.score.right.to_string(), Vec2::new(mid + 40.0, 150.0), 60.0);
}

fn centered_text(frame: &mut Vec<DrawCommand>, fonts: &impl TextMeasure, s: &str, y: f32, size: f32) {
    let width = fonts.measure(s, size);
    let x = (SCREEN_WIDTH / 2) as f32 - width / 2.0;
    text(frame, s.to_string(), Vec2::new(x, y), size);
}

fn text(frame: &mut Vec<DrawCommand>, text: String, pos: Vec2, size: f32) {
    frame.push(DrawCommand::Text {
        text,
        pos,
        size,
        color: colors::FOREGROUND,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    /// Every glyph half as wide as it is tall
    struct Monospace;

    impl TextMeasure for Monospace {
        fn measure(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size / 2.0
        }
    }

    fn texts(frame: &[DrawCommand]) -> Vec<(&str, Vec2)> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, pos, .. } => Some((text.as_str(), *pos)),
                _ => None,
            })
            .collect()
    }

    fn solid_rects(frame: &[DrawCommand]) -> Vec<Rect> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, color } if *color == colors::FOREGROUND => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_serve_scene() {
        let state = GameState::new(1);
        let frame = compose(&state, &Monospace, None);

        // 20 chars * 20 px = 400 px wide, centred on 640
        assert_eq!(
            texts(&frame),
            vec![("Press ENTER to start", Vec2::new(440.0, 150.0))]
        );
        assert_eq!(
            solid_rects(&frame),
            vec![state.left.rect(), state.right.rect(), state.ball.rect()]
        );
    }

    #[test]
    fn test_play_scene_scores_flank_centre() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::PlayUpdate;
        state.score.left = 3;
        state.score.right = 12;

        let frame = compose(&state, &Monospace, None);
        assert_eq!(
            texts(&frame),
            vec![
                ("3", Vec2::new(640.0 - 70.0, 150.0)),
                ("12", Vec2::new(680.0, 150.0)),
            ]
        );
        assert_eq!(solid_rects(&frame).len(), 3);
    }

    #[test]
    fn test_end_scene_names_winner() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::EndUpdate;
        state.score.left = 5;
        state.score.right = 3;

        let frame = compose(&state, &Monospace, None);
        let lines = texts(&frame);
        assert_eq!(lines[0].0, "Player 1 Wins!");
        assert_eq!(lines[1].0, "Press ENTER to play again");
        assert_eq!(lines[1].1.y, 250.0);
        assert!(solid_rects(&frame).is_empty());

        state.score.left = 2;
        state.score.right = 5;
        let frame = compose(&state, &Monospace, None);
        assert_eq!(texts(&frame)[0].0, "Player 2 Wins!");
    }

    #[test]
    fn test_enter_phase_draws_its_scene() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::EndEnter;
        let frame = compose(&state, &Monospace, None);
        assert!(texts(&frame).iter().any(|(t, _)| t.ends_with("Wins!")));
    }

    #[test]
    fn test_fps_overlay() {
        let state = GameState::new(1);
        let frame = compose(&state, &Monospace, Some(59));
        assert!(texts(&frame).contains(&("59 FPS", Vec2::new(10.0, 10.0))));
    }

    #[test]
    fn test_net_spans_court() {
        let frame = compose(&GameState::new(1), &Monospace, None);
        let net: Vec<_> = frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, color } if *color == colors::NET => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(net.len(), 18);
        assert!(net.iter().all(|r| r.left() == 638.0));
        assert!(net.last().is_some_and(|r| r.top() < 720.0));
    }

    #[test]
    fn test_compose_leaves_state_untouched() {
        let mut state = GameState::new(9);
        state.phase = GamePhase::PlayUpdate;
        let before = format!("{state:?}");
        compose(&state, &Monospace, Some(60));
        assert_eq!(format!("{state:?}"), before);
    }
}
