use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// Which side receives each serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServeRule {
    /// Coin flip on every serve
    #[default]
    Random,
    /// Always serve toward the given side
    Toward(Side),
    /// Random first serve, then alternate
    Alternate,
    /// Serve toward the side that just conceded (random first serve)
    TowardConceder,
}

/// Game configuration, fixed once an engine is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_max_speed: f32,
    pub ball_size: f32,
    pub ball_base_speed: f32,
    pub serve_speed_jitter: f32,
    /// Radians either side of horizontal
    pub serve_max_angle: f32,
    pub ball_max_speed: f32,
    pub ball_acceleration: f32,
    pub min_horizontal_speed: f32,
    pub wall_restitution: f32,
    pub spin_factor: f32,
    pub nudge_threshold: f32,
    pub nudge_min: f32,
    pub nudge_max: f32,
    pub win_score: u8,
    pub cooldown_ticks: u32,
    pub serve_delay_ticks: u32,
    pub serve_rule: ServeRule,
    pub ai_deadband: f32,
    pub ai_speed_fraction: f32,
    pub prediction_stride: u32,
    pub prediction_max_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_max_speed: Params::PADDLE_MAX_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_base_speed: Params::BALL_BASE_SPEED,
            serve_speed_jitter: Params::SERVE_SPEED_JITTER,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
            ball_max_speed: Params::BALL_MAX_SPEED,
            ball_acceleration: Params::BALL_ACCELERATION,
            min_horizontal_speed: Params::MIN_HORIZONTAL_SPEED,
            wall_restitution: Params::WALL_RESTITUTION,
            spin_factor: Params::SPIN_FACTOR,
            nudge_threshold: Params::NUDGE_THRESHOLD,
            nudge_min: Params::NUDGE_MIN,
            nudge_max: Params::NUDGE_MAX,
            win_score: Params::WIN_SCORE,
            cooldown_ticks: Params::COOLDOWN_TICKS,
            serve_delay_ticks: Params::SERVE_DELAY_TICKS,
            serve_rule: ServeRule::default(),
            ai_deadband: Params::AI_DEADBAND,
            ai_speed_fraction: Params::AI_SPEED_FRACTION,
            prediction_stride: Params::PREDICTION_STRIDE,
            prediction_max_steps: Params::PREDICTION_MAX_STEPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check construction invariants; the engine refuses to start otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_inset", self.paddle_inset),
            ("paddle_max_speed", self.paddle_max_speed),
            ("ball_size", self.ball_size),
            ("ball_base_speed", self.ball_base_speed),
            ("serve_speed_jitter", self.serve_speed_jitter),
            ("serve_max_angle", self.serve_max_angle),
            ("ball_max_speed", self.ball_max_speed),
            ("ball_acceleration", self.ball_acceleration),
            ("min_horizontal_speed", self.min_horizontal_speed),
            ("wall_restitution", self.wall_restitution),
            ("spin_factor", self.spin_factor),
            ("nudge_threshold", self.nudge_threshold),
            ("nudge_min", self.nudge_min),
            ("nudge_max", self.nudge_max),
            ("ai_deadband", self.ai_deadband),
            ("ai_speed_fraction", self.ai_speed_fraction),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite(field));
        }

        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.paddle_height <= 0.0 || self.paddle_height >= self.arena_height {
            return Err(ConfigError::InvalidPaddleHeight {
                height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }
        if self.paddle_width <= 0.0
            || self.paddle_inset < 0.0
            || 2.0 * (self.paddle_inset + self.paddle_width) >= self.arena_width
        {
            return Err(ConfigError::InvalidPaddleWidth(self.paddle_width));
        }
        if self.ball_size <= 0.0
            || self.ball_size >= self.arena_height
            || self.ball_size >= self.arena_width
        {
            return Err(ConfigError::InvalidBallSize(self.ball_size));
        }
        if self.paddle_max_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("paddle_max_speed"));
        }
        if self.ball_base_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("ball_base_speed"));
        }
        if self.ball_max_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("ball_max_speed"));
        }
        if self.wall_restitution <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed("wall_restitution"));
        }
        if self.serve_speed_jitter < 0.0 {
            return Err(ConfigError::NegativeValue("serve_speed_jitter"));
        }
        if self.ball_acceleration < 0.0 {
            return Err(ConfigError::NegativeValue("ball_acceleration"));
        }
        let required =
            (self.ball_base_speed + self.serve_speed_jitter).max(self.min_horizontal_speed);
        if self.ball_max_speed < required {
            return Err(ConfigError::MaxSpeedTooLow {
                max: self.ball_max_speed,
                required,
            });
        }
        if !(0.0..=std::f32::consts::FRAC_PI_4).contains(&self.serve_max_angle) {
            return Err(ConfigError::InvalidServeAngle(self.serve_max_angle));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.ai_speed_fraction <= 0.0 || self.ai_speed_fraction > 1.0 {
            return Err(ConfigError::InvalidSpeedFraction(self.ai_speed_fraction));
        }
        if self.prediction_stride == 0 {
            return Err(ConfigError::ZeroPredictionStride);
        }
        if self.nudge_min < 0.0 || self.nudge_min > self.nudge_max {
            return Err(ConfigError::InvalidNudgeRange {
                min: self.nudge_min,
                max: self.nudge_max,
            });
        }
        Ok(())
    }

    /// Left edge of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top edge that centres a paddle vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Per-tick speed the opponent is allowed to use
    pub fn ai_speed(&self) -> f32 {
        self.paddle_max_speed * self.ai_speed_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Opponent),
            800.0 - 20.0 - 12.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.arena_height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_rejects_paddle_taller_than_arena() {
        let config = Config {
            paddle_height: 480.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPaddleHeight { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_ball_and_speeds() {
        let config = Config {
            ball_size: 0.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBallSize(0.0)));

        let config = Config {
            paddle_max_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveSpeed("paddle_max_speed"))
        );

        let config = Config {
            ball_max_speed: 3.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MaxSpeedTooLow { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_wall_restitution() {
        for restitution in [0.0, -1.0] {
            let config = Config {
                wall_restitution: restitution,
                ..Config::new()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::NonPositiveSpeed("wall_restitution"))
            );
        }
    }

    #[test]
    fn test_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let config = Config {
            spin_factor: f32::NAN,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::NotFinite("spin_factor")));
    }

    #[test]
    fn test_rejects_wide_serve_angle() {
        let config = Config {
            serve_max_angle: 1.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidServeAngle(1.0)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "win_score": 11, "serve_rule": "Alternate" }"#).unwrap();
        assert_eq!(config.win_score, 11);
        assert_eq!(config.serve_rule, ServeRule::Alternate);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }
}
