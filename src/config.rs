//! Game tuning: word list, round length, accepted keys, storage key.
//!
//! `GameConfig::default()` is the stock game. A page can override any subset of
//! fields by passing a JSON object to `start_game_with_config`; missing fields
//! keep their defaults and the result is validated before a round can use it.

use std::fmt;

use serde::Deserialize;

use crate::score::STORAGE_KEY;

pub const WORD_LIST: &[&str] = &[
    "apples",
    "oranges",
    "watermelon",
    "kiwi",
    "bananas",
    "corn",
    "mushrooms",
    "fennel",
];

/// Round length in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1_000;
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub words: Vec<String>,
    pub duration_secs: u32,
    pub tick_interval_ms: u32,
    pub alphabet: String,
    pub storage_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WORD_LIST.iter().map(|w| (*w).to_owned()).collect(),
            duration_secs: DEFAULT_DURATION_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            alphabet: DEFAULT_ALPHABET.to_owned(),
            storage_key: STORAGE_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    EmptyWord,
    WordOutsideAlphabet { word: String, letter: char },
    ZeroDuration,
    ZeroTickInterval,
    EmptyAlphabet,
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyWordList => write!(f, "word list is empty"),
            ConfigError::EmptyWord => write!(f, "word list contains an empty word"),
            ConfigError::WordOutsideAlphabet { word, letter } => {
                write!(f, "word `{word}` uses `{letter}`, which is not a playable key")
            }
            ConfigError::ZeroDuration => write!(f, "round duration must be at least one second"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
            ConfigError::EmptyAlphabet => write!(f, "alphabet is empty"),
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Defaults overlaid with the fields present in `json`, then validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Every word must be winnable: non-empty and typed entirely from the
    /// alphabet, otherwise a round could never reach `Win`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        for word in &self.words {
            if word.is_empty() {
                return Err(ConfigError::EmptyWord);
            }
            if let Some(letter) = word.chars().find(|c| !self.accepts(*c)) {
                return Err(ConfigError::WordOutsideAlphabet { word: word.clone(), letter });
            }
        }
        if self.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Literal membership test; no case folding.
    pub fn accepts(&self, key: char) -> bool {
        self.alphabet.contains(key)
    }
}
