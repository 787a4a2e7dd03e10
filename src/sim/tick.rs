//! Per-frame game-flow controller
//!
//! One call to [`tick`] runs exactly one phase action: the Enter action of a
//! freshly entered phase, or the Update action of the current one.

use rand::Rng;

use super::collision::{resolve_paddle, resolve_wall};
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held movement keys
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    /// Confirm pressed since the previous tick (edge-triggered)
    pub confirm: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    let next = match state.phase {
        GamePhase::ServeEnter => serve_enter(state),
        GamePhase::ServeUpdate => serve_update(state, input, dt),
        GamePhase::PlayEnter => play_enter(state),
        GamePhase::PlayUpdate => play_update(state, input, dt),
        GamePhase::EndEnter => end_enter(state),
        GamePhase::EndUpdate => end_update(state, input),
    };

    if next != state.phase {
        log::debug!("phase {:?} -> {:?}", state.phase, next);
        state.phase = next;
    }
}

fn serve_enter(state: &mut GameState) -> GamePhase {
    state.ball.center();
    GamePhase::ServeUpdate
}

fn serve_update(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    steer_paddles(state, input, dt);
    if input.confirm {
        GamePhase::PlayEnter
    } else {
        GamePhase::ServeUpdate
    }
}

fn play_enter(state: &mut GameState) -> GamePhase {
    state.ball.vel.x = serve_speed(state);
    state.ball.vel.y = serve_speed(state);
    log::debug!("serve velocity {:?}", state.ball.vel);
    GamePhase::PlayUpdate
}

fn play_update(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    steer_paddles(state, input, dt);
    advance_ball(state, dt);

    let scorer = if state.ball.pos.x < 0 {
        Side::Right
    } else if state.ball.pos.x > SCREEN_WIDTH {
        Side::Left
    } else {
        return GamePhase::PlayUpdate;
    };

    state.events.push(GameEvent::Scored(scorer));
    let points = state.score.award(scorer);
    log::info!(
        "player {} scores ({} - {})",
        scorer.player_number(),
        state.score.left,
        state.score.right
    );

    if points >= WIN_POINTS {
        log::info!("player {} wins the match", scorer.player_number());
        state.events.push(GameEvent::MatchWon(scorer));
        GamePhase::EndEnter
    } else {
        GamePhase::ServeEnter
    }
}

fn end_enter(_state: &mut GameState) -> GamePhase {
    GamePhase::EndUpdate
}

fn end_update(state: &mut GameState, input: &TickInput) -> GamePhase {
    if input.confirm {
        state.score.reset();
        GamePhase::ServeEnter
    } else {
        GamePhase::EndUpdate
    }
}

fn steer_paddles(state: &mut GameState, input: &TickInput, dt: f32) {
    state.left.steer(input.p1_up, input.p1_down, dt);
    state.right.steer(input.p2_up, input.p2_down, dt);
}

/// Move the ball, then wall, left paddle and right paddle in that order.
/// Every check that matches applies, so effects can compound in one tick.
pub fn advance_ball(state: &mut GameState, dt: f32) {
    let GameState {
        ball,
        left,
        right,
        events,
        ..
    } = state;

    ball.advance(dt);
    resolve_wall(ball, events);
    resolve_paddle(ball, left, Side::Left, events);
    resolve_paddle(ball, right, Side::Right, events);
}

/// Integer magnitude in the serve range with a random sign
fn serve_speed(state: &mut GameState) -> f32 {
    let magnitude = state.rng.random_range(SERVE_SPEED_MIN..=SERVE_SPEED_MAX);
    let sign = if state.rng.random_bool(0.5) { 1 } else { -1 };
    (magnitude * sign) as f32
}
