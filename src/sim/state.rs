//! Game state and core simulation types
//!
//! Everything the controller and physics step touch lives in [`GameState`],
//! which is passed by `&mut` into each phase handler.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the game-flow controller
///
/// Enter variants run their one-time action and hand over to the matching
/// Update variant within the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Centre the ball and stop it
    ServeEnter,
    /// Paddles move, waiting for confirm
    ServeUpdate,
    /// Give the ball a random velocity
    PlayEnter,
    /// Rally in progress
    PlayUpdate,
    /// Match just ended
    EndEnter,
    /// Win screen, waiting for confirm
    EndUpdate,
}

/// What the presentation layer shows; Enter and Update share a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Serve,
    Play,
    End,
}

impl GamePhase {
    pub fn scene(self) -> Scene {
        match self {
            GamePhase::ServeEnter | GamePhase::ServeUpdate => Scene::Serve,
            GamePhase::PlayEnter | GamePhase::PlayUpdate => Scene::Play,
            GamePhase::EndEnter | GamePhase::EndUpdate => Scene::End,
        }
    }

    pub fn is_enter(self) -> bool {
        matches!(
            self,
            GamePhase::ServeEnter | GamePhase::PlayEnter | GamePhase::EndEnter
        )
    }
}

/// Which player. Player 1 defends the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based player number shown on screen
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    WallHit,
    PaddleHit,
    Score,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball left the court; the given side scores
    Scored(Side),
    /// The given side reached the win threshold
    MatchWon(Side),
}

impl GameEvent {
    pub fn cue(self) -> Option<SoundCue> {
        match self {
            GameEvent::WallHit => Some(SoundCue::WallHit),
            GameEvent::PaddleHit(_) => Some(SoundCue::PaddleHit),
            GameEvent::Scored(_) => Some(SoundCue::Score),
            GameEvent::MatchWon(_) => None,
        }
    }
}

/// A player's paddle. Only `pos.y` changes after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle for the given side, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LATERAL_DISTANCE,
            Side::Right => SCREEN_WIDTH as f32 - (LATERAL_DISTANCE + PADDLE_WIDTH),
        };
        let y = (SCREEN_HEIGHT / 2) as f32 - (PADDLE_HEIGHT / 2.0).trunc();
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Highest y the paddle may take and still be fully on screen
    pub fn max_y(&self) -> f32 {
        SCREEN_HEIGHT as f32 - self.size.y
    }

    /// Move by held input. Up wins when both are held. `y` keeps its
    /// sub-pixel part rather than snapping to whole pixels.
    pub fn steer(&mut self, up: bool, down: bool, dt: f32) {
        let step = PADDLE_SPEED * dt;
        if up {
            self.pos.y -= step;
        } else if down {
            self.pos.y += step;
        } else {
            return;
        }
        self.pos.y = self.pos.y.clamp(0.0, self.max_y());
    }
}

/// The ball: integer pixel position, continuous velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: IVec2,
    pub size: IVec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        let mut ball = Self {
            pos: IVec2::ZERO,
            size: IVec2::splat(BALL_SIZE),
            vel: Vec2::ZERO,
        };
        ball.center();
        ball
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.as_vec2(), self.size.as_vec2())
    }

    /// Park the ball in the middle of the court, motionless
    pub fn center(&mut self) {
        self.pos = IVec2::new(
            SCREEN_WIDTH / 2 - self.size.x / 2,
            SCREEN_HEIGHT / 2 - self.size.y / 2,
        );
        self.vel = Vec2::ZERO;
    }

    /// Advance by velocity; fractional pixels are truncated toward zero
    pub fn advance(&mut self, dt: f32) {
        let next = self.pos.as_vec2() + self.vel * dt;
        self.pos = next.as_ivec2();
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add one point and return the new total for that side
    pub fn award(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points += 1;
        *points
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Side shown as winner on the end screen (ties go to player 2)
    pub fn leader(&self) -> Side {
        if self.left > self.right {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Left paddle (player 1)
    pub left: Paddle,
    /// Right paddle (player 2)
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
    /// Ticks processed so far
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh match; the seed drives every serve direction
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::ServeEnter,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
            events: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Sound cues raised by the last tick, in order
    pub fn cues(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.events.iter().filter_map(|e| e.cue())
    }
}
