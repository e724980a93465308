use std::fmt;

/// Configuration rejected at engine construction
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tuning value is NaN or infinite
    NotFinite(&'static str),
    /// Arena width or height is not positive
    InvalidArena { width: f32, height: f32 },
    /// Paddle must fit inside the arena: `0 < height < arena_height`
    InvalidPaddleHeight { height: f32, arena_height: f32 },
    /// Paddle width/inset leave no room between the two paddles
    InvalidPaddleWidth(f32),
    /// Ball must be positive and smaller than the arena
    InvalidBallSize(f32),
    /// A speed that must be strictly positive is not
    NonPositiveSpeed(&'static str),
    /// A value that must not be negative is
    NegativeValue(&'static str),
    /// `ball_max_speed` cannot hold the fastest serve or the horizontal floor
    MaxSpeedTooLow { max: f32, required: f32 },
    /// Serve angle must be within `[0, 45°]`
    InvalidServeAngle(f32),
    /// `win_score` must be at least one
    ZeroWinScore,
    /// Opponent speed fraction must be within `(0, 1]`
    InvalidSpeedFraction(f32),
    /// Prediction must advance at least one tick per step
    ZeroPredictionStride,
    /// Nudge range is inverted or negative
    InvalidNudgeRange { min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena must be positive, got {}x{}", width, height)
            }
            ConfigError::InvalidPaddleHeight {
                height,
                arena_height,
            } => write!(
                f,
                "paddle height {} must be in (0, {})",
                height, arena_height
            ),
            ConfigError::InvalidPaddleWidth(width) => {
                write!(f, "paddle width {} does not fit the arena", width)
            }
            ConfigError::InvalidBallSize(size) => {
                write!(f, "ball size {} must be positive and fit the arena", size)
            }
            ConfigError::NonPositiveSpeed(field) => write!(f, "{} must be > 0", field),
            ConfigError::NegativeValue(field) => write!(f, "{} must be >= 0", field),
            ConfigError::MaxSpeedTooLow { max, required } => write!(
                f,
                "ball max speed {} is below the required {}",
                max, required
            ),
            ConfigError::InvalidServeAngle(angle) => {
                write!(f, "serve angle {} rad must be within [0, pi/4]", angle)
            }
            ConfigError::ZeroWinScore => write!(f, "win score must be > 0"),
            ConfigError::InvalidSpeedFraction(fraction) => {
                write!(f, "opponent speed fraction {} must be in (0, 1]", fraction)
            }
            ConfigError::ZeroPredictionStride => write!(f, "prediction stride must be > 0"),
            ConfigError::InvalidNudgeRange { min, max } => {
                write!(f, "nudge range [{}, {}) is invalid", min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
