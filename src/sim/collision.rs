//! Collision tests
//!
//! Two kinds: axis-aligned rectangle overlap for the top-down dodger, and
//! lane + depth-window proximity for the lane runner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Far corner (bottom-right)
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// True iff the rectangles overlap with positive area.
///
/// Each rectangle's near edge must lie strictly before the other's far edge
/// on both axes, so rectangles that only share an edge do not collide.
pub fn rects_collide(a: &Rect, b: &Rect) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.pos.x < b_max.x && b.pos.x < a_max.x && a.pos.y < b_max.y && b.pos.y < a_max.y
}

/// Open-interval check used for depth windows
#[inline]
pub fn in_window(value: f32, window: (f32, f32)) -> bool {
    value > window.0 && value < window.1
}

/// Lane runner proximity: same lane and depth inside the window
#[inline]
pub fn lane_contact(lane: usize, depth: f32, player_lane: usize, window: (f32, f32)) -> bool {
    lane == player_lane && in_window(depth, window)
}
