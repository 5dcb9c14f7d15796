//! Round engine: owns the current round, the scoreboard and the countdown
//! registration, and turns start / tick / key commands into notifications.
//!
//! The engine is independent of the browser. Presentation, persistence, the
//! repeating timer and randomness are injected through the traits below; the
//! `web` module supplies DOM / `localStorage` / `setInterval` versions and the
//! tests supply in-memory ones.
//!
//! Invariants kept here:
//! - at most one round is `Playing`, and at most one countdown is registered;
//! - every path that ends a round cancels the countdown first;
//! - `end` is guarded by the phase, so a round scores exactly once.

use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::round::{GuessResult, Outcome, RoundState};
use crate::score::{ScoreRecord, ScoreStore};

/// Push notifications consumed by whatever renders the game.
pub trait Presenter {
    fn on_round_started(&mut self, round: &RoundState);
    fn on_guess_display_changed(&mut self, revealed: &[char]);
    fn on_tick(&mut self, time_remaining: u32);
    fn on_round_ended(&mut self, outcome: Outcome);
    fn on_score_changed(&mut self, wins: u32, losses: u32);
}

/// Headless presenter.
impl Presenter for () {
    fn on_round_started(&mut self, _round: &RoundState) {}
    fn on_guess_display_changed(&mut self, _revealed: &[char]) {}
    fn on_tick(&mut self, _time_remaining: u32) {}
    fn on_round_ended(&mut self, _outcome: Outcome) {}
    fn on_score_changed(&mut self, _wins: u32, _losses: u32) {}
}

/// Repeating timer. The scheduled callback is expected to call
/// `RoundEngine::tick` once per period until the handle is cancelled.
pub trait Scheduler {
    type Handle;

    /// `None` when the platform refused the registration.
    fn schedule_repeating(&mut self, period_ms: u32) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler that only does bookkeeping; ticks are delivered by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u32,
    live: Vec<u32>,
    registrations: usize,
    last_period_ms: Option<u32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrations not yet cancelled.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    /// Registrations ever made.
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    pub fn last_period_ms(&self) -> Option<u32> {
        self.last_period_ms
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn schedule_repeating(&mut self, period_ms: u32) -> Option<u32> {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.registrations += 1;
        self.last_period_ms = Some(period_ms);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.live.retain(|id| *id != handle);
    }
}

pub struct RoundEngine<S, P, C, R>
where
    C: Scheduler,
{
    config: GameConfig,
    round: RoundState,
    score: ScoreRecord,
    store: S,
    presenter: P,
    scheduler: C,
    rng: R,
    countdown: Option<C::Handle>,
}

impl<S, P, C, R> RoundEngine<S, P, C, R>
where
    S: ScoreStore,
    P: Presenter,
    C: Scheduler,
    R: RandomSource,
{
    /// Loads the scoreboard (absent or unreadable records count as 0 / 0) and
    /// pushes it to the presenter. No round is started.
    pub fn new(config: GameConfig, store: S, mut presenter: P, scheduler: C, rng: R) -> Self {
        let score = store.load().unwrap_or_default();
        log::info!("game loading: {} wins, {} losses", score.wins, score.losses);
        presenter.on_score_changed(score.wins, score.losses);
        Self {
            config,
            round: RoundState::idle(),
            score,
            store,
            presenter,
            scheduler,
            rng,
            countdown: None,
        }
    }

    /// Begins a new round unless one is already in progress.
    /// Returns whether a round was started.
    pub fn start(&mut self) -> bool {
        if self.round.is_playing() {
            log::debug!("start ignored: round already in progress");
            return false;
        }
        if self.config.words.is_empty() {
            log::error!("start ignored: word list is empty");
            return false;
        }
        // A stale registration would double the countdown speed.
        self.stop_countdown();

        let idx = self.rng.index(self.config.words.len());
        let word = &self.config.words[idx.min(self.config.words.len() - 1)];
        self.round = RoundState::begin(word, self.config.duration_secs);
        self.countdown = self.scheduler.schedule_repeating(self.config.tick_interval_ms);
        if self.countdown.is_none() {
            log::error!("countdown could not be scheduled; round will not time out");
        }
        log::info!("round started ({} letters, {}s)", self.round.revealed().len(), self.round.time_remaining());

        self.presenter.on_round_started(&self.round);
        self.presenter.on_guess_display_changed(self.round.revealed());
        true
    }

    /// One countdown step. Ends the round as a loss when time runs out.
    pub fn tick(&mut self) {
        if !self.round.is_playing() {
            return;
        }
        let left = self.round.count_down();
        log::trace!("tick: {left}s left");
        self.presenter.on_tick(left);
        if left == 0 {
            self.end(Outcome::Loss);
        }
    }

    /// Applies one typed letter. Keys outside the alphabet, or any key while no
    /// round is playing, are ignored without touching the display.
    pub fn guess(&mut self, key: char) -> GuessResult {
        if !self.round.is_playing() || !self.config.accepts(key) {
            return GuessResult::Ignored;
        }
        let result = self.round.reveal(key);
        log::debug!("key {key:?}: {result:?}");
        self.presenter.on_guess_display_changed(self.round.revealed());
        if self.round.is_solved() {
            self.end(Outcome::Win);
        }
        result
    }

    /// Raw `KeyboardEvent.key` value. Named keys such as `"Shift"` or
    /// `"ArrowLeft"` are not letters and are ignored.
    pub fn guess_key(&mut self, key: &str) -> GuessResult {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.guess(c),
            _ => GuessResult::Ignored,
        }
    }

    /// Closes the current round with `outcome`. Ignored (returns `false`)
    /// unless a round is playing.
    pub fn end(&mut self, outcome: Outcome) -> bool {
        if !self.round.is_playing() {
            log::debug!("end({outcome:?}) ignored: no round in progress");
            return false;
        }
        self.stop_countdown();
        self.round.finish(outcome);
        match outcome {
            Outcome::Win => self.score.record_win(),
            Outcome::Loss => self.score.record_loss(),
        }
        self.store.save(&self.score);
        log::info!(
            "round ended: {outcome:?} ({} wins, {} losses)",
            self.score.wins,
            self.score.losses
        );

        self.presenter.on_round_ended(outcome);
        self.presenter.on_score_changed(self.score.wins, self.score.losses);
        true
    }

    fn stop_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.round
    }

    pub fn score(&self) -> ScoreRecord {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn has_active_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }
}
