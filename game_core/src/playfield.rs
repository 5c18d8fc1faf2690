use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict interval test against the open horizontal span
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.min.x && x < self.max.x
    }

    /// Vertical extents overlap (touching edges do not count)
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// The fixed-size region every collision check is made against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Side whose edge the box has crossed, if any
    pub fn exited(&self, bounds: &Aabb) -> Option<Side> {
        if bounds.min.x < 0.0 {
            Some(Side::Player)
        } else if bounds.max.x > self.width {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}
