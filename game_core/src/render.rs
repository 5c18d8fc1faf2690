//! Frame description
//!
//! A frame is an ordered list of 2D drawing primitives built from the current
//! entity state. Hosts replay the list on whatever surface they own.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Paddle, Params, Playfield, Side};

/// One primitive drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Stroke a dashed line segment
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: &'static str,
    },
    /// Fill an axis-aligned rectangle (top-left origin)
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    /// Fill a circle
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
}

/// Build the frame for the current state
///
/// Order: clear, net, player paddle, opponent paddle, ball.
pub fn draw_frame(world: &World, field: &Playfield) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);

    commands.push(DrawCommand::Clear {
        width: field.width,
        height: field.height,
    });
    commands.push(DrawCommand::DashedLine {
        from: Vec2::new(field.center_x(), 0.0),
        to: Vec2::new(field.center_x(), field.height),
        dash: Params::NET_DASH,
        color: Params::NET_COLOR,
    });

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Player);
    for paddle in paddles {
        commands.push(DrawCommand::FillRect {
            pos: paddle.pos,
            size: paddle.size,
            color: Params::PADDLE_COLOR,
        });
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        commands.push(DrawCommand::FillCircle {
            center: ball.center(),
            radius: ball.size / 2.0,
            color: Params::BALL_COLOR,
        });
    }

    commands
}
