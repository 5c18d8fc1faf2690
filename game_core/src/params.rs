/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (canvas backing size when none is supplied)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between paddle and side edge

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SERVE_DX: f32 = 5.0; // units per tick
    pub const BALL_SERVE_DY: f32 = 3.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // dx multiplier on paddle hit
    pub const DEFLECTION_SCALE: f32 = 0.2; // impact offset -> dy

    // Opponent heuristic
    pub const OPPONENT_MAX_STEP: f32 = 16.0;
    pub const OPPONENT_DAMPING: f32 = 0.2;

    // Colors (CSS)
    pub const PADDLE_COLOR: &'static str = "#fff";
    pub const BALL_COLOR: &'static str = "#0ff";
    pub const NET_COLOR: &'static str = "#fff3";
    pub const NET_DASH: [f32; 2] = [8.0, 12.0];
}
