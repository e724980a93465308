use game_core::*;
use glam::Vec2;
use hecs::World;

fn scenario_config() -> Config {
    Config {
        arena_width: 800.0,
        arena_height: 480.0,
        ball_size: 20.0,
        ball_base_speed: 7.0,
        serve_speed_jitter: 0.0,
        serve_max_angle: 0.0,
        ..Config::default()
    }
}

fn ball_of(world: &World) -> Ball {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, b)| *b)
        .expect("ball exists")
}

#[test]
fn test_centre_ball_moving_right_scores_once() {
    let config = scenario_config();
    let arena = Arena::from_config(&config);
    let mut world = World::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(1);
    let mut score = Score::new();

    create_paddle(&mut world, Side::Player, config.centered_paddle_y());
    // Opponent parked at the top, well clear of the ball's path
    create_paddle(&mut world, Side::Opponent, 0.0);
    create_ball(&mut world, arena.ball_spawn(config.ball_size), Vec2::new(7.0, 0.0));

    let mut ticks = 0;
    loop {
        events.clear();
        move_ball(&mut world);
        check_collisions(&mut world, &arena, &config, &mut events, &mut rng);
        check_scoring(&mut world, &arena, &config, &mut events);
        ticks += 1;

        if let Some(scorer) = events.goal {
            score.increment(scorer);
            break;
        }
        assert!(ticks < 200, "Ball never left the arena");
    }

    let ball = ball_of(&world);
    assert!(ball.pos.x > 800.0);
    assert_eq!(ball.vel, Vec2::ZERO, "Ball halted on the goal tick");
    assert_eq!(score, Score { player: 1, opponent: 0 });
    assert_eq!(score.has_winner(1), Some(Side::Player));
    assert_eq!(score.has_winner(2), None);
}

#[test]
fn test_single_point_match_ends_on_goal_tick() {
    let config = Config {
        win_score: 1,
        serve_rule: ServeRule::Toward(Side::Player),
        ..scenario_config()
    };
    let mut engine = Engine::new(config, 11).unwrap();
    assert!(engine.request_start());
    engine.set_human_paddle_target(0.0);

    let mut ticks = 0;
    while engine.phase() != Phase::MatchOver {
        let events = *engine.tick();
        ticks += 1;
        if events.goal.is_none() {
            assert_eq!(engine.score(), Score::new());
        }
        assert!(ticks < 500, "Goal never happened");
    }

    assert_eq!(engine.score(), Score { player: 0, opponent: 1 });
    assert_eq!(engine.events().goal, Some(Side::Opponent));
    assert_eq!(engine.winner(), Some(Side::Opponent));
    assert_eq!(engine.snapshot().status, Status::MatchWon { by: Side::Opponent });
}

#[test]
fn test_point_below_win_score_goes_to_point_scored() {
    let config = Config {
        win_score: 3,
        serve_rule: ServeRule::Toward(Side::Player),
        ..scenario_config()
    };
    let mut engine = Engine::new(config, 11).unwrap();
    engine.request_start();
    engine.set_human_paddle_target(0.0);

    while engine.events().goal.is_none() {
        engine.tick();
    }

    assert_eq!(engine.phase(), Phase::PointScored);
    assert_eq!(engine.score().opponent, 1);
}

#[test]
fn test_win_detected_on_the_same_tick() {
    let config = Config {
        win_score: 2,
        cooldown_ticks: 0,
        serve_rule: ServeRule::Toward(Side::Player),
        ..scenario_config()
    };
    let mut engine = Engine::new(config, 3).unwrap();
    engine.request_start();
    engine.set_human_paddle_target(0.0);

    for _ in 0..2_000 {
        engine.tick();
        let score = engine.score();
        if score.opponent == 2 {
            assert_eq!(engine.phase(), Phase::MatchOver);
            return;
        }
        if engine.phase() == Phase::PointScored {
            assert!(engine.request_start(), "Zero cooldown accepts at once");
            engine.set_human_paddle_target(0.0);
        }
    }
    panic!("Match never finished");
}

#[test]
fn test_cooldown_debounces_start() {
    let config = Config {
        cooldown_ticks: 10,
        serve_rule: ServeRule::Toward(Side::Player),
        ..scenario_config()
    };
    let mut engine = Engine::new(config, 8).unwrap();
    engine.request_start();
    engine.set_human_paddle_target(0.0);
    while engine.phase() != Phase::PointScored {
        engine.tick();
    }

    assert!(!engine.request_start(), "Rejected right after the point");
    for _ in 0..9 {
        engine.tick();
        assert!(!engine.request_start(), "Rejected while cooling down");
    }
    engine.tick();
    assert_eq!(engine.snapshot().cooldown_ticks, 0);
    assert!(engine.request_start());
    assert_eq!(engine.phase(), Phase::Serving);
    assert_eq!(engine.score().opponent, 1, "Score carries across points");
}

#[test]
fn test_new_match_after_match_over_resets_scores() {
    let config = Config {
        win_score: 1,
        serve_rule: ServeRule::Toward(Side::Player),
        ..scenario_config()
    };
    let mut engine = Engine::new(config, 2).unwrap();
    engine.request_start();
    engine.set_human_paddle_target(0.0);
    while engine.phase() != Phase::MatchOver {
        engine.tick();
    }

    // Frozen until acknowledged
    engine.tick();
    assert_eq!(engine.score().opponent, 1);

    assert!(engine.request_start());
    assert_eq!(engine.phase(), Phase::Serving);
    assert_eq!(engine.score(), Score::new());
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_opponent_closes_in_but_lags() {
    let config = Config::default();
    let arena = Arena::from_config(&config);
    let mut world = World::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(4);

    create_opponent_paddle(&mut world, 0.0);
    create_ball(&mut world, Vec2::new(40.0, 60.0), Vec2::new(6.0, 3.5));

    let ticks = 30;
    for _ in 0..ticks {
        events.clear();
        drive_opponent(&mut world, &arena, &config);
        move_ball(&mut world);
        check_collisions(&mut world, &arena, &config, &mut events, &mut rng);
    }

    let y = world
        .query::<(&Paddle, &Opponent)>()
        .iter()
        .next()
        .map(|(_e, (p, _))| p.y)
        .expect("opponent exists");
    assert!(y > 0.0, "Opponent moved toward the ball");
    assert!(y < config.paddle_max_speed * ticks as f32);
    assert!(y <= config.ai_speed() * ticks as f32 + 1e-3);
}

#[test]
fn test_pointer_beyond_arena_pins_paddle_to_bottom() {
    let mut engine = Engine::with_defaults(6);
    let config = engine.config().clone();
    engine.set_human_paddle_target(config.arena_height * 3.0);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.player.y, config.arena_height - config.paddle_height);

    engine.request_start();
    engine.set_human_paddle_target(f32::INFINITY);
    assert_eq!(
        engine.snapshot().player.y,
        config.centered_paddle_y(),
        "Non-finite targets are ignored"
    );
}

#[test]
fn test_scores_never_decrease_within_a_match() {
    let config = Config {
        win_score: 3,
        cooldown_ticks: 5,
        ..Config::default()
    };
    let mut engine = Engine::new(config, 2024).unwrap();
    engine.request_start();

    let mut previous = engine.score();
    let mut points = 0;
    for _ in 0..30_000 {
        let phase_before = engine.phase();
        let goal = engine.tick().goal;
        let score = engine.score();

        assert!(score.player >= previous.player);
        assert!(score.opponent >= previous.opponent);
        let gained = (score.player - previous.player) + (score.opponent - previous.opponent);
        if goal.is_some() {
            assert_eq!(gained, 1, "Exactly one side scores per point");
            assert!(matches!(
                engine.phase(),
                Phase::PointScored | Phase::MatchOver
            ));
            points += 1;
        } else {
            assert_eq!(gained, 0);
        }
        if phase_before == Phase::Rallying && engine.phase() == Phase::Rallying {
            let ball = engine.snapshot().ball;
            assert!(ball.y >= 0.0 && ball.y + ball.size <= engine.arena().height);
        }

        previous = score;
        match engine.phase() {
            Phase::PointScored => {
                engine.request_start();
            }
            Phase::MatchOver => break,
            _ => {}
        }
    }

    assert_eq!(
        points,
        engine.score().player as u32 + engine.score().opponent as u32
    );
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut engine = Engine::with_defaults(9);
    engine.request_start();
    engine.tick();

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["phase"], "Rallying");
    assert_eq!(json["status"], "InPlay");
    assert_eq!(json["score"]["player"], 0);
    assert!(json["ball"]["size"].as_f64().unwrap() > 0.0);
}
