//! Word Guess core crate.
//!
//! A timed word-guessing round: a secret word is picked, the player types
//! letters to uncover it before the countdown reaches zero, and a win / loss
//! scoreboard survives across sessions. The round engine is plain Rust and is
//! tested natively; `web` binds it to the page and is what `start_game()`
//! launches from JS.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod logging;
pub mod rng;
pub mod round;
pub mod score;
pub mod web;

pub use config::{ConfigError, GameConfig, WORD_LIST};
pub use engine::{ManualScheduler, Presenter, RoundEngine, Scheduler};
pub use rng::{FixedIndex, OsRandom, RandomSource, SequenceIndex};
pub use round::{GuessResult, Outcome, Phase, RoundState, PLACEHOLDER};
pub use score::{MemoryStore, ScoreRecord, ScoreStore, STORAGE_KEY};
pub use web::{game_snapshot, request_start, start_game, start_game_with_config, submit_guess};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Changes console verbosity at runtime (`"debug"`, `"warn"`, ...).
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(logging::parse_level(level));
}
