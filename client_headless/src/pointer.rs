//! Scripted stand-in for a mouse: chases the ball like a slightly slow human

use game_core::{Side, Snapshot};

/// Pointer that moves toward the ball with a capped hand speed and a fixed aim
/// error, so it misses now and then
#[derive(Debug, Clone, Copy)]
pub struct ScriptedPointer {
    /// Current pointer position (paddle top edge)
    pub y: f32,
    /// Maximum pointer travel per tick
    pub hand_speed: f32,
    /// Constant offset between where it aims and the ball centre
    pub aim_error: f32,
}

impl ScriptedPointer {
    pub fn new(start_y: f32, hand_speed: f32, aim_error: f32) -> Self {
        Self {
            y: start_y,
            hand_speed,
            aim_error,
        }
    }

    /// Next pointer position given the latest frame
    pub fn next_target(&mut self, snapshot: &Snapshot) -> f32 {
        let paddle = snapshot.paddle(Side::Player);
        let ball_center = snapshot.ball.y + snapshot.ball.size / 2.0;
        // Only chase a ball that is coming back; otherwise hold still
        let aim = if snapshot.ball.vx < 0.0 {
            ball_center + self.aim_error
        } else {
            paddle.y + paddle.height / 2.0
        };

        let desired = aim - paddle.height / 2.0;
        let diff = desired - self.y;
        self.y += diff.clamp(-self.hand_speed, self.hand_speed);
        self.y
    }
}
