//! Quiz Runner headless demo
//!
//! Runs an auto-playing session against the builtin question bank: the
//! driver answers correctly most of the time, the way a distracted
//! human would. Useful for watching the phase machine with
//! `RUST_LOG=debug`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use quiz_runner::consts::SIM_DT;
use quiz_runner::sim::{Phase, SessionState, TickEvent, tick};

/// How often the demo driver answers correctly
const DEMO_ACCURACY: f64 = 0.85;
/// Safety cap so a lucky driver still terminates
const MAX_TICKS: u64 = 60 * 60 * 5;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Quiz Runner demo starting (seed {seed})");

    let mut driver = Pcg32::seed_from_u64(seed ^ 0xDEC0DE);
    let mut state = SessionState::new(seed);
    state.start();

    let mut ticks = 0u64;
    while state.phase != Phase::GameOver && ticks < MAX_TICKS {
        if let TickEvent::Collision(id) = tick(&mut state, SIM_DT) {
            let item = state.active_item().expect("quiz phase has an active item");
            log::info!("hit {:?}: {}", id, item.prompt);

            let correct = item.correct;
            let options = item.options.len();
            let selected = if driver.random_bool(DEMO_ACCURACY) {
                correct
            } else {
                // Any wrong option ends the run
                (correct + 1) % options
            };
            state.answer(selected);
        }
        ticks += 1;
    }

    match state.final_score() {
        Some(score) => log::info!("game over after {ticks} ticks, final score {score}"),
        None => log::info!("demo stopped after {ticks} ticks, score {}", state.score),
    }
}
