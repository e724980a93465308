use serde::Serialize;

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator for serves and paddle nudges
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    /// Side that won a point this tick
    pub goal: Option<Side>,
    /// Paddle the ball bounced off this tick
    pub paddle_hit: Option<Side>,
    pub wall_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Tick countdown armed after a point; start triggers are ignored until it runs out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    pub ticks_left: u32,
}

impl Cooldown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, ticks: u32) {
        self.ticks_left = ticks;
    }

    pub fn update(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    pub fn is_ready(&self) -> bool {
        self.ticks_left == 0
    }
}
