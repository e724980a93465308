//! Headless match runner
//!
//! Plays full matches between a scripted pointer and the computer opponent,
//! logging each point. Handy for tuning a config file without a renderer.
//!
//! Usage: `client_headless [config.json] [--seed N] [--matches N] [--threaded]`

mod pointer;

use std::error::Error;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use game_core::{Config, Engine, Phase, SharedEngine, Side};
use pointer::ScriptedPointer;

/// Give up on a match that runs this long (about 30 minutes at 60 Hz)
const MAX_TICKS_PER_MATCH: u64 = 108_000;

/// Frame pacing for the threaded demo
const FRAME: Duration = Duration::from_millis(16);

struct Options {
    config_path: Option<String>,
    seed: u64,
    matches: u32,
    threaded: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        config_path: None,
        seed: 12345,
        matches: 1,
        threaded: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value.parse()?;
            }
            "--matches" => {
                let value = args.next().ok_or("--matches needs a value")?;
                options.matches = value.parse()?;
            }
            "--threaded" => options.threaded = true,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option {}", flag).into());
            }
            path => options.config_path = Some(path.to_string()),
        }
    }
    Ok(options)
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&text)?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Play one match to completion on the calling thread
fn play_match(engine: &mut Engine, pointer: &mut ScriptedPointer) -> Option<Side> {
    engine.request_start();

    for _ in 0..MAX_TICKS_PER_MATCH {
        let snapshot = engine.snapshot();
        engine.set_human_paddle_target(pointer.next_target(&snapshot));

        let events = *engine.tick();
        if let Some(side) = events.paddle_hit {
            log::trace!("{:?} returned the ball", side);
        }

        match engine.phase() {
            // Click to continue as soon as it is accepted
            Phase::PointScored => {
                engine.request_start();
            }
            Phase::MatchOver => return engine.winner(),
            _ => {}
        }
    }

    log::warn!("Match abandoned after {} ticks", MAX_TICKS_PER_MATCH);
    engine.reset();
    None
}

/// Same match, but input arrives from a second thread
fn play_match_threaded(shared: &SharedEngine, pointer: ScriptedPointer) -> Option<Side> {
    shared.request_start();

    let done = Arc::new(AtomicBool::new(false));
    let input = shared.clone();
    let stop = Arc::clone(&done);
    let mut pointer = pointer;
    let pointer_thread = thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            let snapshot = input.snapshot();
            input.set_human_paddle_target(pointer.next_target(&snapshot));
            if snapshot.phase == Phase::PointScored {
                input.request_start();
            }
            thread::sleep(FRAME / 2);
        }
    });

    let mut winner = None;
    for _ in 0..MAX_TICKS_PER_MATCH {
        shared.tick();
        winner = shared.with(|engine| engine.winner());
        if winner.is_some() {
            break;
        }
        thread::sleep(FRAME);
    }
    done.store(true, Ordering::Relaxed);
    if winner.is_none() {
        log::warn!("Match abandoned after {} ticks", MAX_TICKS_PER_MATCH);
        shared.with(|engine| engine.reset());
    }
    if pointer_thread.join().is_err() {
        log::error!("Pointer thread panicked");
    }
    winner
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = load_config(options.config_path.as_deref())?;
    let mut engine = Engine::new(config, options.seed)?;
    log::info!(
        "Running {} match(es) with seed {}",
        options.matches,
        options.seed
    );

    let start_y = engine.snapshot().player.y;
    let pointer = ScriptedPointer::new(start_y, 9.0, 12.0);
    let mut wins = (0u32, 0u32);

    if options.threaded {
        let shared = SharedEngine::new(engine);
        for _ in 0..options.matches {
            record(&mut wins, play_match_threaded(&shared, pointer));
            let score = shared.with(|engine| engine.score());
            log::info!("Final score {}-{}", score.player, score.opponent);
        }
    } else {
        let mut pointer = pointer;
        for _ in 0..options.matches {
            record(&mut wins, play_match(&mut engine, &mut pointer));
            let score = engine.score();
            log::info!("Final score {}-{}", score.player, score.opponent);
        }
    }

    log::info!("Player won {}, opponent won {}", wins.0, wins.1);
    Ok(())
}

fn record(wins: &mut (u32, u32), winner: Option<Side>) {
    match winner {
        Some(Side::Player) => wins.0 += 1,
        Some(Side::Opponent) => wins.1 += 1,
        None => {}
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
