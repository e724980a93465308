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
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Inclusive overlap: boxes that merely touch count as overlapping
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Playing field geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn midline_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Top-left corner that centres a square of `size`
    pub fn ball_spawn(&self, size: f32) -> Vec2 {
        Vec2::new((self.width - size) / 2.0, (self.height - size) / 2.0)
    }

    /// Bounding box of a side's paddle with its top edge at `y`
    pub fn paddle_box(&self, config: &Config, side: Side, y: f32) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(config.paddle_x(side), y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Whether a ball at `pos` has fully left through a goal line, and which side it
    /// left through
    pub fn exited_side(&self, pos: Vec2, size: f32) -> Option<Side> {
        if pos.x + size < 0.0 {
            Some(Side::Player)
        } else if pos.x > self.width {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_boxes_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let c = Aabb::new(Vec2::new(10.1, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_ball_spawn_is_centered() {
        let arena = Arena::new(800.0, 480.0);
        assert_eq!(arena.ball_spawn(20.0), Vec2::new(390.0, 230.0));
    }

    #[test]
    fn test_exited_side_requires_full_exit() {
        let arena = Arena::new(800.0, 480.0);
        assert_eq!(arena.exited_side(Vec2::new(-19.0, 100.0), 20.0), None);
        assert_eq!(
            arena.exited_side(Vec2::new(-20.5, 100.0), 20.0),
            Some(Side::Player)
        );
        assert_eq!(arena.exited_side(Vec2::new(800.0, 100.0), 20.0), None);
        assert_eq!(
            arena.exited_side(Vec2::new(800.5, 100.0), 20.0),
            Some(Side::Opponent)
        );
    }

    #[test]
    fn test_paddle_box_uses_config_geometry() {
        let config = Config::default();
        let arena = Arena::from_config(&config);
        let b = arena.paddle_box(&config, Side::Opponent, 100.0);
        assert_eq!(b.min, Vec2::new(768.0, 100.0));
        assert_eq!(b.max, Vec2::new(780.0, 180.0));
    }
}
