//! Scoreboard persistence in `window.localStorage`.

use web_sys::{window, Storage};

use crate::score::{ScoreRecord, ScoreStore};

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        match window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Option<ScoreRecord> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        ScoreRecord::from_json(&raw)
    }

    fn save(&mut self, record: &ScoreRecord) {
        let Some(storage) = Self::storage() else {
            log::warn!("score not saved: no localStorage");
            return;
        };
        if let Err(err) = storage.set_item(&self.key, &record.to_json()) {
            log::warn!("score not saved: {err:?}");
        }
    }
}
