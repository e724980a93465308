use hecs::World;
use rand::Rng;

use crate::{Arena, Ball, Config, GameRng, Paddle, ServeRule, Side};

/// Pick which side receives the next serve
///
/// `previous` is the last receiver and `conceded` the side that lost the last
/// point; both are `None` at the start of a match.
pub fn choose_receiver(
    rule: ServeRule,
    previous: Option<Side>,
    conceded: Option<Side>,
    rng: &mut GameRng,
) -> Side {
    let coin_flip = |rng: &mut GameRng| {
        if rng.0.gen_bool(0.5) {
            Side::Opponent
        } else {
            Side::Player
        }
    };

    match rule {
        ServeRule::Random => coin_flip(rng),
        ServeRule::Toward(side) => side,
        ServeRule::Alternate => match previous {
            Some(side) => side.other(),
            None => coin_flip(rng),
        },
        ServeRule::TowardConceder => match conceded {
            Some(side) => side,
            None => coin_flip(rng),
        },
    }
}

/// Reset positions for a new rally: paddles centred, ball centred and launched
/// toward `receiver`
pub fn serve_ball(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    rng: &mut GameRng,
    receiver: Side,
) {
    let paddle_y = config.centered_paddle_y();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = paddle_y;
    }

    let spawn = arena.ball_spawn(config.ball_size);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(spawn, receiver, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_serve_centres_everything() {
        let mut world = World::new();
        let config = Config::new();
        let arena = Arena::from_config(&config);
        let mut rng = GameRng::new(3);
        create_paddle(&mut world, Side::Player, 0.0);
        create_paddle(&mut world, Side::Opponent, 400.0);
        create_ball(&mut world, Vec2::new(-50.0, 10.0), Vec2::ZERO);

        serve_ball(&mut world, &arena, &config, &mut rng, Side::Player);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, config.centered_paddle_y());
        }
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, arena.ball_spawn(config.ball_size));
            assert!(ball.vel.x < 0.0);
        }
    }

    #[test]
    fn test_fixed_and_alternating_receivers() {
        let mut rng = GameRng::new(9);
        let fixed = ServeRule::Toward(Side::Opponent);
        assert_eq!(choose_receiver(fixed, None, None, &mut rng), Side::Opponent);
        assert_eq!(
            choose_receiver(fixed, Some(Side::Opponent), Some(Side::Player), &mut rng),
            Side::Opponent
        );

        assert_eq!(
            choose_receiver(ServeRule::Alternate, Some(Side::Player), None, &mut rng),
            Side::Opponent
        );
        assert_eq!(
            choose_receiver(
                ServeRule::TowardConceder,
                Some(Side::Player),
                Some(Side::Opponent),
                &mut rng
            ),
            Side::Opponent
        );
    }

    #[test]
    fn test_random_rule_reaches_both_sides() {
        let mut rng = GameRng::new(42);
        let picks: Vec<Side> = (0..64)
            .map(|_| choose_receiver(ServeRule::Random, None, None, &mut rng))
            .collect();
        assert!(picks.contains(&Side::Player));
        assert!(picks.contains(&Side::Opponent));
    }
}
