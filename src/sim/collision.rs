//! Collision detection and response for axis-aligned rectangles
//!
//! Boxes are tested for overlap only: no penetration depth and no
//! time-of-impact. A fast enough ball can tunnel through a paddle.

use glam::Vec2;

use super::state::{Ball, GameEvent, Paddle, Side};
use crate::consts::{PADDLE_BOOST, SCREEN_HEIGHT, WALL_BOUNCE};

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Overlap on both axes, boundaries included (touching edges collide)
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.left() > other.right() || other.left() > self.right() {
            return false;
        }
        if self.top() > other.bottom() || other.top() > self.bottom() {
            return false;
        }
        true
    }
}

/// Does the ball's box touch the paddle's box?
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.rect().overlaps(&paddle.rect())
}

/// Bounce off the top/bottom wall. No positional correction.
pub fn resolve_wall(ball: &mut Ball, events: &mut Vec<GameEvent>) {
    if ball.top() <= 0 || ball.bottom() >= SCREEN_HEIGHT {
        ball.vel.y *= -WALL_BOUNCE;
        events.push(GameEvent::WallHit);
    }
}

/// Bounce off a paddle and snap the ball flush against its face
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, events: &mut Vec<GameEvent>) {
    if !collides(ball, paddle) {
        return;
    }

    ball.vel.x *= -PADDLE_BOOST;
    let rect = paddle.rect();
    ball.pos.x = match side {
        Side::Left => rect.right() as i32,
        Side::Right => rect.left() as i32 - ball.size.x,
    };
    events.push(GameEvent::PaddleHit(side));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn ball_at(x: i32, y: i32, vel: Vec2) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            vel,
            ..Default::default()
        }
    }

    fn left_paddle_at(y: f32) -> Paddle {
        let mut paddle = Paddle::new(Side::Left);
        paddle.pos.y = y;
        paddle
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&rect(0.0, 10.0, 5.0, 5.0)));
        assert!(a.overlaps(&rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Overlaps in y, not in x
        assert!(!a.overlaps(&rect(10.5, 2.0, 5.0, 5.0)));
        // Overlaps in x, not in y
        assert!(!a.overlaps(&rect(2.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn test_ball_against_left_paddle() {
        let paddle = left_paddle_at(300.0);
        let mut ball = ball_at(60, 340, Vec2::new(-450.0, 100.0));
        assert!(collides(&ball, &paddle));

        let mut events = Vec::new();
        resolve_paddle(&mut ball, &paddle, Side::Left, &mut events);
        assert_eq!(ball.pos.x, 68);
        assert!((ball.vel.x - 495.0).abs() < 1e-3);
        assert_eq!(ball.vel.y, 100.0);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
    }

    #[test]
    fn test_ball_against_right_paddle() {
        let paddle = Paddle::new(Side::Right);
        let mut ball = ball_at(1205, 330, Vec2::new(400.0, 0.0));

        let mut events = Vec::new();
        resolve_paddle(&mut ball, &paddle, Side::Right, &mut events);
        assert_eq!(ball.pos.x, 1212 - 15);
        assert!((ball.vel.x + 440.0).abs() < 1e-3);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Right)]);
    }

    #[test]
    fn test_paddle_miss_leaves_ball_alone() {
        let paddle = left_paddle_at(0.0);
        let mut ball = ball_at(60, 400, Vec2::new(-450.0, 0.0));
        let before = ball;

        let mut events = Vec::new();
        resolve_paddle(&mut ball, &paddle, Side::Left, &mut events);
        assert_eq!(ball, before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_wall_bounce_top_and_bottom() {
        let mut events = Vec::new();

        let mut ball = ball_at(600, 0, Vec2::new(0.0, -400.0));
        resolve_wall(&mut ball, &mut events);
        assert!((ball.vel.y - 412.0).abs() < 1e-3);
        assert_eq!(ball.pos.y, 0);

        let mut ball = ball_at(600, 705, Vec2::new(0.0, 400.0));
        resolve_wall(&mut ball, &mut events);
        assert!((ball.vel.y + 412.0).abs() < 1e-3);

        assert_eq!(events, vec![GameEvent::WallHit, GameEvent::WallHit]);
    }

    #[test]
    fn test_no_wall_bounce_mid_court() {
        let mut events = Vec::new();
        let mut ball = ball_at(600, 1, Vec2::new(0.0, -400.0));
        resolve_wall(&mut ball, &mut events);
        assert_eq!(ball.vel.y, -400.0);
        assert!(events.is_empty());
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            w in 0.0f32..50.0, h in 0.0f32..50.0,
        ) {
            let a = rect(ax, ay, w, h);
            let b = rect(bx, by, h, w);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_gap_on_x_never_collides(gap in 0.01f32..500.0, dy in -200.0f32..200.0) {
            let a = rect(0.0, 0.0, 18.0, 86.0);
            let b = rect(18.0 + gap, dy, 15.0, 15.0);
            prop_assert!(!a.overlaps(&b));
        }

        #[test]
        fn prop_bounces_never_slow_the_ball(
            vx in 400.0f32..500.0, vy in 400.0f32..500.0, hits in 1usize..20,
        ) {
            let paddle = left_paddle_at(300.0);
            let mut ball = ball_at(60, 340, Vec2::new(-vx, vy));
            let mut events = Vec::new();
            for _ in 0..hits {
                let (sx, sy) = (ball.vel.x.abs(), ball.vel.y.abs());
                ball.pos = IVec2::new(60, 340);
                resolve_paddle(&mut ball, &paddle, Side::Left, &mut events);
                ball.pos.y = 0;
                resolve_wall(&mut ball, &mut events);
                prop_assert!(ball.vel.x.abs() >= sx);
                prop_assert!(ball.vel.y.abs() >= sy);
            }
        }
    }
}
