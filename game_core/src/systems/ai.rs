use hecs::World;

use crate::{predict_intercept, step_toward, Arena, Ball, Config, Opponent, Paddle, Side};

/// Vertical centre the opponent paddle should aim for
///
/// Strategy:
/// 1. Ball moving away, or still on the far half: follow the ball's current centre.
/// 2. Ball incoming and past the midline: forward-simulate it to the paddle
///    face and aim for where it arrives.
pub fn opponent_target(ball: &Ball, arena: &Arena, config: &Config) -> f32 {
    let center = ball.center(config.ball_size);
    let incoming = ball.vel.x > 0.0;

    if incoming && center.x >= arena.midline_x() {
        let prediction = predict_intercept(*ball, arena, config, Side::Opponent);
        prediction.ball.center(config.ball_size).y
    } else {
        center.y
    }
}

/// Move a paddle's top edge toward `target_center` at the opponent's capped speed
///
/// Errors inside the deadband are left alone, and the paddle never overshoots.
pub fn track_target(paddle_y: f32, target_center: f32, config: &Config) -> f32 {
    let paddle_center = paddle_y + config.paddle_height / 2.0;
    let diff = target_center - paddle_center;
    if diff.abs() <= config.ai_deadband {
        return paddle_y;
    }

    let center = step_toward(paddle_center, target_center, config.ai_speed());
    config.clamp_paddle_y(center - config.paddle_height / 2.0)
}

/// Run the control policy for every paddle tagged [`Opponent`]
pub fn drive_opponent(world: &mut World, arena: &Arena, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return;
    };

    let target = opponent_target(&ball, arena, config);
    for (_entity, (paddle, _opponent)) in world.query_mut::<(&mut Paddle, &Opponent)>() {
        paddle.y = track_target(paddle.y, target, config);
    }
}
