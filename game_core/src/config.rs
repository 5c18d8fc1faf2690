use crate::components::Side;
use crate::params::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_serve_dx: f32,
    pub ball_serve_dy: f32,
    pub ball_speed_increase: f32,
    pub deflection_scale: f32,
    pub opponent_max_step: f32,
    pub opponent_damping: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_serve_dx: Params::BALL_SERVE_DX,
            ball_serve_dy: Params::BALL_SERVE_DY,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            deflection_scale: Params::DEFLECTION_SCALE,
            opponent_max_step: Params::OPPONENT_MAX_STEP,
            opponent_damping: Params::OPPONENT_DAMPING,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on an arena of the given size (usually the canvas backing size)
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle's top edge so the paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.arena_height - self.paddle_height).max(0.0))
    }

    /// Top-left corner that centres the ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Whether both paddles and the ball fit inside the arena
    pub fn fits_arena(&self) -> bool {
        self.arena_height >= self.paddle_height
            && self.arena_height >= self.ball_size
            && self.arena_width >= 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size
    }
}
