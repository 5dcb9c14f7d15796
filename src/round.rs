//! Round data: lifecycle phase, secret word, revealed letters and countdown.
//!
//! Everything here is pure data plus the letter-reveal matching; the engine in
//! `crate::engine` decides when these transitions are allowed.

use serde::Serialize;

/// Symbol shown for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Playing,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Message shown in the result banner.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Loss => "You Lost!",
        }
    }
}

/// What a single key press did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// Not playing, or the key is outside the accepted alphabet.
    Ignored,
    /// The letter was new and uncovered this many positions.
    Revealed(usize),
    /// The letter had already been revealed.
    Repeated,
    /// The letter does not occur in the word.
    Miss,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoundState {
    phase: Phase,
    secret_word: String,
    revealed: Vec<char>,
    time_remaining: u32,
    outcome: Option<Outcome>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::idle()
    }
}

impl RoundState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            secret_word: String::new(),
            revealed: Vec::new(),
            time_remaining: 0,
            outcome: None,
        }
    }

    /// Fresh round: every letter hidden, full countdown, phase `Playing`.
    pub(crate) fn begin(secret_word: &str, duration_secs: u32) -> Self {
        Self {
            phase: Phase::Playing,
            secret_word: secret_word.to_owned(),
            revealed: vec![PLACEHOLDER; secret_word.chars().count()],
            time_remaining: duration_secs,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once every position of the secret word is uncovered.
    pub fn is_solved(&self) -> bool {
        !self.secret_word.is_empty() && self.revealed.iter().copied().eq(self.secret_word.chars())
    }

    /// Revealed letters joined with single spaces, e.g. `"k _ _ _"`.
    pub fn display(&self) -> String {
        display_revealed(&self.revealed)
    }

    /// Uncovers every position holding `letter`. Does not check the phase.
    pub(crate) fn reveal(&mut self, letter: char) -> GuessResult {
        if self.revealed.contains(&letter) {
            return GuessResult::Repeated;
        }
        let mut uncovered = 0;
        for (slot, c) in self.revealed.iter_mut().zip(self.secret_word.chars()) {
            if c == letter {
                *slot = c;
                uncovered += 1;
            }
        }
        if uncovered == 0 { GuessResult::Miss } else { GuessResult::Revealed(uncovered) }
    }

    /// One countdown step. Returns the seconds left afterwards.
    pub(crate) fn count_down(&mut self) -> u32 {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended;
        self.outcome = Some(outcome);
    }
}

pub fn display_revealed(revealed: &[char]) -> String {
    let mut out = String::with_capacity(revealed.len() * 2);
    for (i, c) in revealed.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}
