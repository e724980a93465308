use glam::Vec2;
use hecs::World;

use crate::{
    apply_pointer_target, choose_receiver, create_ball, create_opponent_paddle, create_paddle,
    serve_ball, step, Arena, Ball, BallView, Config, ConfigError, Cooldown, Events, GameRng,
    MatchAction, MatchFsm, Paddle, PaddleView, Phase, Score, Side, Snapshot, Status,
};

/// A single match of human vs. computer, advanced one tick at a time
///
/// Owns every piece of mutable state: the entity world, score, phase and RNG.
/// Drivers call [`Engine::tick`] once per frame, forward pointer movement to
/// [`Engine::set_human_paddle_target`] and clicks to [`Engine::request_start`],
/// and draw from [`Engine::snapshot`].
pub struct Engine {
    world: World,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: MatchFsm,
    cooldown: Cooldown,
    serve_delay: Cooldown,
    serving_direction: Option<Side>,
    last_point: Option<Side>,
    winner: Option<Side>,
    tick: u64,
}

impl Engine {
    /// Build an engine in the Idle phase, rejecting invalid configuration
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Engine with the stock tuning from [`crate::Params`]
    pub fn with_defaults(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    fn build(config: Config, seed: u64) -> Self {
        let arena = Arena::from_config(&config);
        let mut world = World::new();

        // Create paddles
        let paddle_y = config.centered_paddle_y();
        create_paddle(&mut world, Side::Player, paddle_y);
        create_opponent_paddle(&mut world, paddle_y);

        // Create ball, resting until the first serve
        create_ball(&mut world, arena.ball_spawn(config.ball_size), Vec2::ZERO);

        log::debug!(
            "engine ready: arena {}x{}, first to {}",
            arena.width,
            arena.height,
            config.win_score
        );

        Self {
            world,
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
            cooldown: Cooldown::new(),
            serve_delay: Cooldown::new(),
            serving_direction: None,
            last_point: None,
            winner: None,
            tick: 0,
        }
    }

    /// Move the human paddle's top edge, clamped into the arena
    pub fn set_human_paddle_target(&mut self, y: f32) {
        apply_pointer_target(&mut self.world, &self.config, y);
    }

    /// Start a match, continue after a point, or begin a fresh match after the
    /// last one ended
    ///
    /// Returns `false` (and changes nothing) mid-serve, mid-rally, or while the
    /// post-point cooldown is still running.
    pub fn request_start(&mut self) -> bool {
        if !self.fsm.can_transition(MatchAction::Start) {
            log::debug!("start ignored during {:?}", self.fsm.phase());
            return false;
        }

        match self.fsm.phase() {
            Phase::PointScored => {
                if !self.cooldown.is_ready() {
                    log::debug!(
                        "start ignored, cooldown has {} ticks left",
                        self.cooldown.ticks_left
                    );
                    return false;
                }
                self.advance(MatchAction::Start);
                self.serve();
            }
            Phase::MatchOver => {
                // MatchOver -> Idle, then straight into a new match
                self.advance(MatchAction::Start);
                self.start_match();
            }
            _ => self.start_match(),
        }
        true
    }

    /// Abandon whatever is in progress and go back to Idle
    ///
    /// Scores are zeroed, the ball rests at the centre and both paddles are
    /// centred. The next [`Engine::request_start`] begins a fresh match.
    pub fn reset(&mut self) {
        self.fsm.reset();
        self.score.reset();
        self.winner = None;
        self.last_point = None;
        self.serving_direction = None;
        self.cooldown = Cooldown::new();
        self.serve_delay = Cooldown::new();
        self.events.clear();

        let paddle_y = self.config.centered_paddle_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        let spawn = self.arena.ball_spawn(self.config.ball_size);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = spawn;
            ball.halt();
        }
        log::info!("match reset");
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) -> &Events {
        self.events.clear();
        self.tick += 1;

        match self.fsm.phase() {
            Phase::Serving => {
                if self.serve_delay.is_ready() {
                    self.advance(MatchAction::BeginRally);
                    self.rally_tick();
                } else {
                    self.serve_delay.update();
                }
            }
            Phase::Rallying => self.rally_tick(),
            Phase::PointScored => self.cooldown.update(),
            Phase::Idle | Phase::MatchOver => {}
        }

        &self.events
    }

    fn advance(&mut self, action: MatchAction) {
        let result = self.fsm.transition(action);
        debug_assert!(
            result.success(),
            "{:?} is not legal from {:?}",
            result.action(),
            result.from_phase()
        );
    }

    fn start_match(&mut self) {
        self.score.reset();
        self.winner = None;
        self.last_point = None;
        self.serving_direction = None;
        self.advance(MatchAction::Start);
        log::info!("match started, first to {}", self.config.win_score);
        self.serve();
    }

    fn serve(&mut self) {
        let conceded = self.last_point.map(Side::other);
        let receiver = choose_receiver(
            self.config.serve_rule,
            self.serving_direction,
            conceded,
            &mut self.rng,
        );
        self.serving_direction = Some(receiver);
        serve_ball(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.rng,
            receiver,
        );
        self.serve_delay.start(self.config.serve_delay_ticks);
        log::debug!("serving toward {:?}", receiver);
    }

    fn rally_tick(&mut self) {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(scorer) = self.events.goal {
            self.award_point(scorer);
        }
    }

    fn award_point(&mut self, scorer: Side) {
        self.score.increment(scorer);
        self.last_point = Some(scorer);

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.winner = Some(winner);
            self.advance(MatchAction::MatchWon);
            log::info!(
                "{:?} wins the match {}-{}",
                winner,
                self.score.player,
                self.score.opponent
            );
        } else {
            self.advance(MatchAction::PointWon);
            self.cooldown.start(self.config.cooldown_ticks);
            log::info!(
                "point to {:?}, score {}-{}",
                scorer,
                self.score.player,
                self.score.opponent
            );
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> Status {
        match (self.fsm.phase(), self.last_point, self.winner) {
            (Phase::Serving, _, _) => Status::Serving,
            (Phase::Rallying, _, _) => Status::InPlay,
            (Phase::PointScored, Some(by), _) => Status::PointScored { by },
            (Phase::MatchOver, _, Some(by)) => Status::MatchWon { by },
            _ => Status::AwaitingStart,
        }
    }

    /// Copy out everything a renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        let config = &self.config;
        let mut player_y = config.centered_paddle_y();
        let mut opponent_y = config.centered_paddle_y();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player_y = paddle.y,
                Side::Opponent => opponent_y = paddle.y,
            }
        }

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.arena.ball_spawn(config.ball_size), Vec2::ZERO));

        let paddle_view = |side: Side, y: f32| PaddleView {
            x: config.paddle_x(side),
            y,
            width: config.paddle_width,
            height: config.paddle_height,
        };

        Snapshot {
            tick: self.tick,
            phase: self.fsm.phase(),
            status: self.status(),
            score: self.score,
            player: paddle_view(Side::Player, player_y),
            opponent: paddle_view(Side::Opponent, opponent_y),
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                vx: ball.vel.x,
                vy: ball.vel.y,
                size: config.ball_size,
            },
            cooldown_ticks: self.cooldown.ticks_left,
            serving_direction: self.serving_direction,
        }
    }
}
