//! Win / loss scoreboard and the store it is persisted to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key the scoreboard is stored under.
pub const STORAGE_KEY: &str = "week-4-activity-28-scores";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub wins: u32,
    pub losses: u32,
}

impl ScoreRecord {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    pub fn to_json(&self) -> String {
        // Two integer fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{\"wins\":0,\"losses\":0}"))
    }

    /// Parses a stored record. Only a JSON object with both counters is a
    /// record; anything else yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("discarding malformed score record {raw:?}: {err}");
                return None;
            }
        };
        // Derived `Deserialize` would also fill the fields from a sequence.
        if !value.is_object() {
            log::warn!("discarding score record {raw:?}: not an object");
            return None;
        }
        match ScoreRecord::deserialize(value) {
            Ok(rec) => Some(rec),
            Err(err) => {
                log::warn!("discarding malformed score record {raw:?}: {err}");
                None
            }
        }
    }
}

/// Where the scoreboard survives between sessions.
///
/// Writes are fire-and-forget from the engine's point of view; an
/// implementation that can fail should log and carry on.
pub trait ScoreStore {
    fn load(&self) -> Option<ScoreRecord>;
    fn save(&mut self, record: &ScoreRecord);
}

/// In-memory store that keeps the serialized form, so reloads go through the
/// same JSON codec the browser store uses.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with an arbitrary raw value (possibly malformed).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()), saves: 0 }
    }

    pub fn with_record(record: ScoreRecord) -> Self {
        Self::with_raw(record.to_json())
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<ScoreRecord> {
        self.raw.as_deref().and_then(ScoreRecord::from_json)
    }

    fn save(&mut self, record: &ScoreRecord) {
        self.raw = Some(record.to_json());
        self.saves += 1;
    }
}
