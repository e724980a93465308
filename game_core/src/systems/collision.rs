use crate::{Aabb, Arena, Ball, Config, Events, GameRng, Paddle, Side};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Bounce a ball off the top and bottom walls
///
/// Pure so the opponent's trajectory prediction reflects exactly like the real
/// step. Returns the updated ball and whether a wall was touched.
pub fn reflect_off_walls(mut ball: Ball, arena: &Arena, config: &Config) -> (Ball, bool) {
    let size = config.ball_size;
    let hit_top = ball.pos.y <= 0.0;
    let hit_bottom = ball.pos.y + size >= arena.height;
    if !hit_top && !hit_bottom {
        return (ball, false);
    }

    // Clamp position to prevent stuck
    if hit_top {
        ball.pos.y = 0.0;
    } else {
        ball.pos.y = arena.height - size;
    }

    let speed = (ball.vel.y.abs() * config.wall_restitution).min(config.ball_max_speed);
    ball.vel.y = if hit_top { speed } else { -speed };

    (ball, true)
}

/// Return a ball off a paddle it has just touched
///
/// Puts the ball flush against the paddle face, sends it away faster, and adds
/// spin from how far off-centre it struck.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    side: Side,
    paddle_y: f32,
    config: &Config,
    rng: &mut GameRng,
) {
    let paddle_x = config.paddle_x(side);
    ball.pos.x = match side {
        Side::Player => paddle_x + config.paddle_width,
        Side::Opponent => paddle_x - config.ball_size,
    };

    let speed_x = (ball.vel.x.abs() + config.ball_acceleration)
        .max(config.min_horizontal_speed)
        .min(config.ball_max_speed);
    // Away from the paddle that was hit
    ball.vel.x = speed_x * side.other().direction();

    let ball_center = ball.pos.y + config.ball_size / 2.0;
    let paddle_center = paddle_y + config.paddle_height / 2.0;
    let offset = ball_center - paddle_center;
    ball.vel.y = (ball.vel.y + offset * config.spin_factor)
        .clamp(-config.ball_max_speed, config.ball_max_speed);

    // A flat return would rally forever
    if ball.vel.y.abs() < config.nudge_threshold {
        let magnitude = if config.nudge_max > config.nudge_min {
            rng.0.gen_range(config.nudge_min..config.nudge_max)
        } else {
            config.nudge_min
        };
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        ball.vel.y += sign * magnitude;
    }
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // First, collect ball and paddle data without holding borrows
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return; // No ball in world
    };

    // Check top/bottom wall bounces
    let (mut ball, wall_hit) = reflect_off_walls(ball, arena, config);
    if wall_hit {
        events.wall_hit = true;
        log::trace!("wall bounce at y={:.1}, vy={:.2}", ball.pos.y, ball.vel.y);
    }

    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Opponent);

    let ball_box = Aabb::from_corner_size(ball.pos, Vec2::splat(config.ball_size));
    for (side, paddle_y) in paddles {
        let paddle_box = arena.paddle_box(config, side, paddle_y);
        // Only a ball travelling toward the paddle is returned
        let approaching = ball.vel.x * side.direction() > 0.0;

        if approaching && ball_box.overlaps(&paddle_box) {
            bounce_off_paddle(&mut ball, side, paddle_y, config, rng);
            events.paddle_hit = Some(side);
            log::trace!(
                "{:?} paddle hit, vel=({:.2}, {:.2})",
                side,
                ball.vel.x,
                ball.vel.y
            );
            break;
        }
    }

    // Update ball
    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}
