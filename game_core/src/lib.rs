pub mod components;
pub mod config;
pub mod params;
pub mod playfield;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use playfield::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick
pub fn step(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Walls, then player paddle, then opponent paddle
    check_collisions(world, field, config, events);

    // 3. Ball left the field: restart the rally
    check_rally_reset(world, field, config, events, rng);

    // 4. Opponent follows the ball
    drive_opponent(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
