use hecs::World;

use crate::{Config, Paddle, Side};

/// Move the human paddle to an absolute top-edge position
///
/// Out-of-range targets are clamped into the arena and non-finite ones are
/// dropped. Returns the position actually applied.
pub fn apply_pointer_target(world: &mut World, config: &Config, target_y: f32) -> Option<f32> {
    if !target_y.is_finite() {
        log::debug!("ignoring non-finite paddle target {}", target_y);
        return None;
    }

    let y = config.clamp_paddle_y(target_y);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = y;
            return Some(y);
        }
    }
    None
}
