use crate::{Ball, Config, Events, Paddle, Playfield, Side};
use hecs::World;

/// Check ball collisions with walls, then with each paddle
pub fn check_collisions(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    bounce_walls(world, field, events);
    bounce_paddles(world, config, events);
}

/// Reflect the ball off the top and bottom walls
pub fn bounce_walls(world: &mut World, field: &Playfield, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
        if ball.pos.y + ball.size > field.height {
            ball.pos.y = field.height - ball.size;
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Resolve ball/paddle contact, player side first
pub fn bounce_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball_hits_paddle(ball, paddle) {
                deflect(ball, paddle, config);
                events.paddle_hit = Some(paddle.side);
            }
        }
    }
}

/// The ball's leading edge must sit strictly inside the paddle's horizontal
/// span while the vertical extents overlap.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let paddle_box = paddle.bounds();
    let leading_x = match paddle.side {
        Side::Player => ball.pos.x,
        Side::Opponent => ball.pos.x + ball.size,
    };
    paddle_box.spans_x(leading_x) && ball.bounds().overlaps_y(&paddle_box)
}

/// Push the ball flush against the paddle face, speed it up and aim it by
/// where it struck
fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    ball.pos.x = match paddle.side {
        Side::Player => paddle.pos.x + paddle.size.x,
        Side::Opponent => paddle.pos.x - ball.size,
    };
    ball.vel.x *= -config.ball_speed_increase;

    let impact_offset = ball.center().y - paddle.center_y();
    ball.vel.y = impact_offset * config.deflection_scale;
}
