use game_core::*;
use glam::Vec2;

fn new_sim(seed: u64) -> Simulation {
    Simulation::new(Config::new(), seed)
}

#[test]
fn test_ball_moves_by_velocity_without_collisions() {
    let mut sim = new_sim(3);
    let center = sim.config.ball_spawn();
    sim.place_ball(center, Vec2::new(5.0, 3.0));

    sim.tick();

    assert_eq!(sim.ball().pos, center + Vec2::new(5.0, 3.0));
    assert_eq!(sim.ball().vel, Vec2::new(5.0, 3.0));
    assert_eq!(sim.events, Events::default());
}

#[test]
fn test_ball_stays_inside_field_vertically() {
    for seed in 0..8 {
        let mut sim = new_sim(seed);
        let max_y = sim.config.arena_height - sim.config.ball_size;

        for i in 0..5_000 {
            // Sweep the pointer so rallies vary
            let pointer = ((i * 37) % 600) as f32 - 50.0;
            sim.set_player_center(pointer);
            sim.tick();

            let ball = sim.ball();
            assert!(
                ball.pos.y >= 0.0 && ball.pos.y <= max_y,
                "seed {seed} tick {i}: ball y {} out of bounds",
                ball.pos.y
            );
        }
    }
}

#[test]
fn test_opponent_stays_inside_field() {
    let mut sim = new_sim(11);
    let max_y = sim.config.arena_height - sim.config.paddle_height;

    for _ in 0..5_000 {
        sim.tick();
        let y = sim.opponent().pos.y;
        assert!((0.0..=max_y).contains(&y), "opponent y {y} out of bounds");
    }
}

#[test]
fn test_player_paddle_return_is_flush_and_faster() {
    let mut sim = new_sim(5);
    sim.set_player_center(250.0);
    let paddle = sim.player();

    // Next tick puts the ball's left edge inside the paddle
    let start = Vec2::new(paddle.pos.x + paddle.size.x + 2.0, paddle.center_y() - 7.0);
    sim.place_ball(start, Vec2::new(-6.0, 0.0));

    sim.tick();

    let ball = sim.ball();
    assert_eq!(ball.pos.x, paddle.pos.x + paddle.size.x);
    assert!(ball.vel.x > 0.0, "Horizontal direction flips");
    assert!((ball.vel.x - 6.0 * sim.config.ball_speed_increase).abs() < 1e-4);
    assert_eq!(sim.events.paddle_hit, Some(Side::Player));
}

#[test]
fn test_opponent_paddle_return() {
    let mut sim = new_sim(5);
    let paddle = sim.opponent();
    let size = sim.config.ball_size;

    // Vertically aligned so the opponent heuristic runs after the hit
    let start = Vec2::new(paddle.pos.x - size - 2.0, paddle.center_y() - size / 2.0);
    sim.place_ball(start, Vec2::new(6.0, 0.0));

    sim.tick();

    let ball = sim.ball();
    assert_eq!(ball.pos.x, paddle.pos.x - size);
    assert!(ball.vel.x < 0.0);
    assert_eq!(sim.events.paddle_hit, Some(Side::Opponent));
}

#[test]
fn test_ball_leaving_left_edge_is_recentered() {
    let mut sim = new_sim(9);
    // Park the player paddle away from the ball's path
    sim.set_player_center(480.0);
    sim.place_ball(Vec2::new(3.0, 40.0), Vec2::new(-5.0, -3.0));

    sim.tick();

    let ball = sim.ball();
    assert_eq!(sim.events.rally_reset, Some(Side::Player));
    assert_eq!(ball.pos, sim.config.ball_spawn());
    assert_ne!(ball.vel.x, 0.0);
    assert_ne!(ball.vel.y, 0.0);

    // The next frame draws it at the centre
    let frame = sim.frame();
    let center = Vec2::new(sim.config.arena_width, sim.config.arena_height) / 2.0;
    assert!(frame.contains(&DrawCommand::FillCircle {
        center,
        radius: sim.config.ball_size / 2.0,
        color: Params::BALL_COLOR,
    }));
}

#[test]
fn test_ball_leaving_right_edge_is_recentered() {
    let mut sim = new_sim(9);
    let x = sim.config.arena_width - sim.config.ball_size - 1.0;
    sim.place_ball(Vec2::new(x, 30.0), Vec2::new(5.0, 3.0));

    sim.tick();

    assert_eq!(sim.events.rally_reset, Some(Side::Opponent));
    assert_eq!(sim.ball().pos, sim.config.ball_spawn());
}

#[test]
fn test_same_seed_same_rally() {
    let mut a = new_sim(77);
    let mut b = new_sim(77);

    for _ in 0..2_000 {
        a.tick();
        b.tick();
    }

    assert_eq!(a.ball().pos, b.ball().pos);
    assert_eq!(a.ball().vel, b.ball().vel);
    assert_eq!(a.opponent().pos, b.opponent().pos);
}

#[test]
fn test_smaller_canvas() {
    let mut sim = Simulation::new(Config::with_arena(400.0, 300.0), 1);
    assert_eq!(sim.opponent().pos.x, 400.0 - 20.0 - 12.0);
    assert_eq!(sim.ball().pos, Vec2::new(193.0, 143.0));

    for _ in 0..1_000 {
        sim.tick();
        assert!(sim.ball().pos.y <= 300.0 - 14.0);
    }
}
