/// Game tuning parameters for Pong
///
/// Speeds are in arena units per tick; the engine has no delta time, so the
/// driver's tick rate sets the pace of play.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between arena edge and paddle
    pub const PADDLE_MAX_SPEED: f32 = 6.0;

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_BASE_SPEED: f32 = 6.0;
    pub const SERVE_SPEED_JITTER: f32 = 1.5;
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // 45°
    pub const BALL_MAX_SPEED: f32 = 14.0;
    pub const BALL_ACCELERATION: f32 = 0.5; // Added to |vx| on every paddle hit
    pub const MIN_HORIZONTAL_SPEED: f32 = 4.0;
    pub const WALL_RESTITUTION: f32 = 1.02; // Slightly lively walls
    pub const SPIN_FACTOR: f32 = 0.12; // vy gained per unit of hit offset
    pub const NUDGE_THRESHOLD: f32 = 0.5;
    pub const NUDGE_MIN: f32 = 0.5;
    pub const NUDGE_MAX: f32 = 1.5;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Round flow (ticks)
    pub const COOLDOWN_TICKS: u32 = 45;
    pub const SERVE_DELAY_TICKS: u32 = 0;

    // Opponent
    pub const AI_DEADBAND: f32 = 10.0;
    pub const AI_SPEED_FRACTION: f32 = 0.85;
    pub const PREDICTION_STRIDE: u32 = 3; // Real ticks per predicted step
    pub const PREDICTION_MAX_STEPS: u32 = 120;
}
