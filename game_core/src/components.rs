use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// One end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the human's pointer
    Player,
    /// Right paddle, driven by the control policy
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal direction a ball travels when heading toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Paddle component - `y` is the top edge; x and size come from [`Config`]
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Marks the paddle moved by the control policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Opponent;

/// Ball component - `pos` is the top-left corner of its square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center(&self, size: f32) -> Vec2 {
        self.pos + Vec2::splat(size / 2.0)
    }

    /// Place the ball at `spawn` and launch it toward `receiver`
    ///
    /// Speed is drawn from `[base, base + jitter]` and the angle from
    /// `[-serve_max_angle, serve_max_angle]` around horizontal.
    pub fn serve(&mut self, spawn: Vec2, receiver: Side, config: &Config, rng: &mut GameRng) {
        self.pos = spawn;

        let speed = if config.serve_speed_jitter > 0.0 {
            let fastest = config.ball_base_speed + config.serve_speed_jitter;
            rng.0.gen_range(config.ball_base_speed..=fastest)
        } else {
            config.ball_base_speed
        };
        let angle: f32 = if config.serve_max_angle > 0.0 {
            rng.0.gen_range(-config.serve_max_angle..=config.serve_max_angle)
        } else {
            0.0
        };

        self.vel = Vec2::new(angle.cos() * receiver.direction(), angle.sin()) * speed;
    }

    /// Stop the ball where it is
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
    }
}
