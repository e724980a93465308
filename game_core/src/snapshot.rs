use serde::Serialize;

use crate::{Phase, Score, Side};

/// Paddle geometry as a renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Ball position, velocity and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
}

/// Why the match is where it is, for on-screen messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    AwaitingStart,
    Serving,
    InPlay,
    PointScored { by: Side },
    MatchWon { by: Side },
}

/// Read-only view of the engine after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: Phase,
    pub status: Status,
    pub score: Score,
    pub player: PaddleView,
    pub opponent: PaddleView,
    pub ball: BallView,
    /// Ticks until a start trigger is accepted again
    pub cooldown_ticks: u32,
    /// Side receiving the current (or most recent) serve
    pub serving_direction: Option<Side>,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> &PaddleView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}
