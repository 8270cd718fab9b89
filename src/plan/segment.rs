//! Wall segments and the plan that owns them
//!
//! A plan is an ordered list of 2D wall segments in a shared plan
//! coordinate system, plus the extrusion parameters. Plans are read-only
//! input: built once at startup and never touched by the render loop.

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

fn default_wall_height() -> f32 {
    200.0
}

fn default_wall_thickness() -> f32 {
    10.0
}

/// A single wall in plan coordinates, from (x1, y1) to (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl WallSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Vec2 {
        vec2(self.x1, self.y1)
    }

    pub fn end(&self) -> Vec2 {
        vec2(self.x2, self.y2)
    }

    /// Euclidean length. Zero-length segments are legal and yield 0.
    pub fn length(&self) -> f32 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotation about the vertical axis that carries +X onto the segment
    /// direction: atan2(y2 - y1, x2 - x1).
    pub fn yaw(&self) -> f32 {
        (self.y2 - self.y1).atan2(self.x2 - self.x1)
    }

    pub fn midpoint(&self) -> Vec2 {
        vec2((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }
}

/// An ordered set of wall segments with extrusion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub segments: Vec<WallSegment>,
    /// Wall extrusion height in plan units
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    /// Wall box depth in plan units
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    /// Floor texture path, relative to the working directory
    #[serde(default)]
    pub floor_texture: Option<String>,
}

impl Plan {
    pub fn new(segments: Vec<WallSegment>) -> Self {
        Self {
            segments,
            wall_height: default_wall_height(),
            wall_thickness: default_wall_thickness(),
            floor_texture: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_segment_length() {
        let seg = WallSegment::new(0.0, 0.0, 3.0, 4.0);
        assert!((seg.length() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_length_segment() {
        let seg = WallSegment::new(7.0, 7.0, 7.0, 7.0);
        assert_eq!(seg.length(), 0.0);
        // atan2(0, 0) is defined as 0; the degenerate box is the fallback
        assert_eq!(seg.yaw(), 0.0);
    }

    #[test]
    fn test_yaw_quadrants() {
        assert!((WallSegment::new(0.0, 0.0, 1.0, 0.0).yaw() - 0.0).abs() < 0.001);
        assert!((WallSegment::new(0.0, 0.0, 0.0, 1.0).yaw() - FRAC_PI_2).abs() < 0.001);
        assert!((WallSegment::new(0.0, 0.0, -1.0, 0.0).yaw() - PI).abs() < 0.001);
        assert!((WallSegment::new(0.0, 0.0, 0.0, -1.0).yaw() + FRAC_PI_2).abs() < 0.001);
    }

    #[test]
    fn test_midpoint() {
        let seg = WallSegment::new(0.0, 0.0, 1000.0, 200.0);
        let mid = seg.midpoint();
        assert!((mid.x - 500.0).abs() < 0.001);
        assert!((mid.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_plan_defaults() {
        let plan = Plan::new(vec![WallSegment::new(0.0, 0.0, 1.0, 0.0)]);
        assert!((plan.wall_height - 200.0).abs() < 0.001);
        assert!((plan.wall_thickness - 10.0).abs() < 0.001);
        assert!(plan.floor_texture.is_none());
    }
}
