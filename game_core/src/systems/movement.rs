use crate::Ball;
use hecs::World;

/// Move ball by one tick of its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Advance `y` toward `target` by at most `max_step`, never overshooting
pub fn step_toward(y: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - y;
    if diff.abs() <= max_step {
        target
    } else {
        y + diff.signum() * max_step
    }
}
