pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod shared;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use shared::*;
pub use snapshot::*;
pub use systems::*;

use hecs::World;

/// Run one rally tick of the Pong simulation
///
/// Order matters: the opponent reacts to where the ball is before it moves,
/// collisions resolve against the post-move position, and a goal is only
/// checked once paddles have had their chance.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Opponent control policy
    drive_opponent(world, arena, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, arena, config, events, rng);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, arena, config, events);
}

/// Helper to create the human paddle, or an uncontrolled one on either side
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the computer-controlled paddle
pub fn create_opponent_paddle(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Opponent, y), Opponent))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
