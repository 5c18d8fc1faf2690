use crate::{Config, Paddle, Side};
use hecs::World;

/// Centre the player paddle on a pointer's field-space y, clamped to the field
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            let y = config.clamp_paddle_y(pointer_y - paddle.size.y / 2.0);
            paddle.dy = y - paddle.pos.y;
            paddle.pos.y = y;
        }
    }
}
