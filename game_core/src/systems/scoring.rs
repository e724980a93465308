use crate::{Arena, Ball, Config, Events};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// A ball that has fully crossed a goal line is stopped and the scoring side
/// is recorded in `events`; the match state machine takes it from there.
pub fn check_scoring(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(conceded) = arena.exited_side(ball.pos, config.ball_size) {
            ball.halt();
            events.goal = Some(conceded.other());
            return;
        }
    }
}
