use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Steer the opponent paddle toward the ball
///
/// The step toward the target is capped at `opponent_max_step`, then damped,
/// then the paddle is clamped inside the field.
pub fn drive_opponent(world: &mut World, config: &Config) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        paddle.dy = opponent_step(paddle, &ball, config);
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + paddle.dy * config.opponent_damping);
    }
}

/// Undamped step the opponent wants to take this tick
pub fn opponent_step(paddle: &Paddle, ball: &Ball, config: &Config) -> f32 {
    let target = ball.pos.y - paddle.size.y / 2.0 + ball.size / 2.0;
    let delta = target - paddle.pos.y;
    if paddle.center_y() < ball.center().y {
        delta.min(config.opponent_max_step)
    } else {
        delta.max(-config.opponent_max_step)
    }
}
