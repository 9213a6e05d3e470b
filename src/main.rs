//! Brick Sweep entry point
//!
//! Runs a headless autoplay session: the paddle chases the ball, frames are
//! resolved at a fixed rate and the collision log goes through `log`.
//!
//! Usage: `brick-sweep [seed] [tuning.json]`

use std::path::Path;

use brick_sweep::Tuning;
use brick_sweep::sim::{CollisionKind, Game, Phase, StepInput, WallSide};

/// Fixed frame time (120 Hz)
const FRAME_US: u64 = 8_333;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 120 * 600;

/// Per-kind collision tally
#[derive(Debug, Default)]
struct Tally {
    walls: u64,
    paddle: u64,
    bricks: u64,
    lost: u64,
}

impl Tally {
    fn record(&mut self, kind: CollisionKind) {
        match kind {
            CollisionKind::Wall(WallSide::Bottom) => self.lost += 1,
            CollisionKind::Wall(_) => self.walls += 1,
            CollisionKind::Paddle => self.paddle += 1,
            CollisionKind::Brick { .. } => self.bricks += 1,
        }
    }
}

/// Steer the paddle under the ball
fn autopilot(game: &Game) -> StepInput {
    let offset = game.store.ball.position.x - game.store.paddle.position.x;
    let half_width = game.store.paddle.half_size().x;
    StepInput {
        frame_time_us: FRAME_US,
        paddle_control: (offset / half_width).clamp(-1.0, 1.0),
        launch: game.phase == Phase::Serve,
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed {arg:?}: {err}");
                std::process::exit(2);
            }
        },
        None => 1,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    log::info!(
        "Brick Sweep starting: seed {}, {} difficulty",
        seed,
        tuning.difficulty.as_str()
    );

    let mut game = Game::new(seed, tuning);
    let mut tally = Tally::default();

    while game.frames < MAX_FRAMES && matches!(game.phase, Phase::Serve | Phase::Playing) {
        let input = autopilot(&game);
        game.step(&input);
        for event in game.events() {
            tally.record(event.kind);
        }
    }

    let seconds = game.frames as f64 * FRAME_US as f64 / 1_000_000.0;
    log::info!("Finished in phase {:?} after {:.1}s", game.phase, seconds);
    println!(
        "{:?}: score {} | lives {} | bricks left {} | {} frames ({:.1}s)",
        game.phase,
        game.score,
        game.lives,
        game.store.bricks_remaining(),
        game.frames,
        seconds
    );
    println!(
        "hits: walls {} | paddle {} | bricks {} | balls lost {}",
        tally.walls, tally.paddle, tally.bricks, tally.lost
    );
}
