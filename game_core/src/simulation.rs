use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::apply_pointer;
use crate::{
    create_ball, create_paddle, draw_frame, step, Ball, Config, DrawCommand, Events, GameRng,
    Paddle, Playfield, Side,
};

/// Everything one game owns: the three entities plus the resources the
/// systems read. The loop driver holds it and calls `tick` once per frame.
pub struct Simulation {
    pub world: World,
    pub field: Playfield,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
    player: Entity,
    opponent: Entity,
    ball: Entity,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Self {
        let field = Playfield::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let player = create_paddle(&mut world, Side::Player, &config);
        let opponent = create_paddle(&mut world, Side::Opponent, &config);

        let serve = Ball::serve(&config, &mut rng);
        let ball = create_ball(&mut world, serve.pos, serve.vel, serve.size);

        Self {
            world,
            field,
            config,
            events: Events::new(),
            rng,
            tick: 0,
            player,
            opponent,
            ball,
        }
    }

    /// Physics update for one frame
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
    }

    /// Frame description of the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        draw_frame(&self.world, &self.field)
    }

    /// Pointer moved: centre the player paddle on `y` (field space)
    pub fn set_player_center(&mut self, y: f32) {
        apply_pointer(&mut self.world, &self.config, y);
    }

    pub fn player(&self) -> Paddle {
        self.paddle(self.player)
    }

    pub fn opponent(&self) -> Paddle {
        self.paddle(self.opponent)
    }

    pub fn ball(&self) -> Ball {
        match self.world.get::<&Ball>(self.ball) {
            Ok(ball) => *ball,
            // The ball is spawned once and never despawned
            Err(_) => Ball::new(self.config.ball_spawn(), Vec2::ZERO, self.config.ball_size),
        }
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn paddle(&self, entity: Entity) -> Paddle {
        match self.world.get::<&Paddle>(entity) {
            Ok(paddle) => *paddle,
            Err(_) => {
                let side = if entity == self.player {
                    Side::Player
                } else {
                    Side::Opponent
                };
                Paddle::new(side, &self.config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulation_layout() {
        let sim = Simulation::new(Config::new(), 1);

        assert_eq!(sim.player().side, Side::Player);
        assert_eq!(sim.opponent().side, Side::Opponent);
        assert_eq!(sim.player().pos.y, sim.config.paddle_spawn_y());
        assert_eq!(sim.ball().pos, sim.config.ball_spawn());
        assert_eq!(sim.ball().vel.x.abs(), 5.0);
        assert_eq!(sim.ball().vel.y.abs(), 3.0);
        assert_eq!(sim.tick, 0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut sim = Simulation::new(Config::new(), 1);
        for _ in 0..3 {
            sim.tick();
        }
        assert_eq!(sim.tick, 3);
    }

    #[test]
    fn test_set_player_center() {
        let mut sim = Simulation::new(Config::new(), 1);
        sim.set_player_center(100.0);
        assert_eq!(sim.player().pos.y, 60.0);
        assert_eq!(sim.player().center_y(), 100.0);
    }
}
