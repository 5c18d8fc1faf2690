use glam::Vec2;

use crate::{Aabb, Config, GameRng};

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left, follows the pointer
    Opponent, // right, driven by the heuristic
}

/// Paddle component
///
/// Position is the top-left corner; x never changes after spawn.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub dy: f32, // last vertical step
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_spawn_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            dy: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
///
/// Position is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball at the arena centre with a freshly randomized serve
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with a random sign on each axis
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = config.ball_spawn();
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(config.ball_serve_dx * sx, config.ball_serve_dy * sy);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}
