use crate::{Ball, Config, Events, GameRng, Playfield};
use hecs::World;

/// Recentre the ball if it left the field on either side
///
/// No points are tallied; leaving the field only restarts the rally.
pub fn check_rally_reset(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = field.exited(&ball.bounds()) {
            events.rally_reset = Some(side);
            ball.reset(config, rng);
        }
    }
}
