use crate::{reflect_off_walls, Arena, Ball, Config, Side};

/// Where a forward-simulated ball ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub ball: Ball,
    /// Coarse steps taken
    pub steps: u32,
    /// Whether the ball reached the paddle plane within the step budget
    pub reached: bool,
}

/// Run a copy of `ball` forward for `steps` coarse steps of `stride` ticks each
///
/// Walls reflect through [`reflect_off_walls`]; paddles and goals are ignored.
pub fn simulate(mut ball: Ball, arena: &Arena, config: &Config, steps: u32, stride: u32) -> Ball {
    for _ in 0..steps {
        ball.pos += ball.vel * stride as f32;
        ball = reflect_off_walls(ball, arena, config).0;
    }
    ball
}

/// Predict where `ball` meets the face of `side`'s paddle
///
/// Steps in increments of `config.prediction_stride` ticks and gives up after
/// `config.prediction_max_steps`, so a ball that never arrives costs a
/// bounded amount of work.
pub fn predict_intercept(ball: Ball, arena: &Arena, config: &Config, side: Side) -> Prediction {
    let plane_x = match side {
        Side::Player => config.paddle_x(Side::Player) + config.paddle_width,
        Side::Opponent => config.paddle_x(Side::Opponent),
    };
    let reached = |b: &Ball| match side {
        Side::Player => b.pos.x <= plane_x,
        Side::Opponent => b.pos.x + config.ball_size >= plane_x,
    };

    let mut current = ball;
    let mut steps = 0;
    while !reached(&current) {
        if steps >= config.prediction_max_steps {
            return Prediction {
                ball: current,
                steps,
                reached: false,
            };
        }
        current = simulate(current, arena, config, 1, config.prediction_stride);
        steps += 1;
    }

    Prediction {
        ball: current,
        steps,
        reached: true,
    }
}
