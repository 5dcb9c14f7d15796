//! Browser glue: binds the round engine to the page's DOM, to
//! `window.setInterval` and to `localStorage`, and exposes the wasm entry points.
//!
//! The engine lives in a thread-local slot. Every DOM / interval callback
//! borrows it, runs one command to completion and releases it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::engine::RoundEngine;
use crate::rng::OsRandom;
use crate::round::{GuessResult, RoundState};
use crate::score::ScoreRecord;

mod dom;
mod interval;
mod storage;

pub use dom::DomPresenter;
pub use interval::{IntervalHandle, IntervalScheduler};
pub use storage::LocalStorageStore;

type WebEngine = RoundEngine<LocalStorageStore, DomPresenter, IntervalScheduler, OsRandom>;

thread_local! {
    static ENGINE: RefCell<Option<WebEngine>> = const { RefCell::new(None) };
}

/// Runs `f` against the mounted engine. `None` when nothing is mounted or the
/// engine is already borrowed further up the stack.
fn with_engine<T>(f: impl FnOnce(&mut WebEngine) -> T) -> Option<T> {
    ENGINE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            log::warn!("engine busy; command dropped");
            None
        }
    })
}

/// Wires the page with the given configuration: loads the scoreboard,
/// attaches the start button and keyboard listeners. Mounting twice is an error.
pub fn mount(config: GameConfig) -> Result<(), JsValue> {
    if ENGINE.with(|cell| cell.borrow().is_some()) {
        return Err(JsValue::from_str("game already mounted"));
    }
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let presenter = DomPresenter::from_document(&doc)?;
    let start_button = dom::require(&doc, dom::START_BUTTON_SELECTOR)?;
    let store = LocalStorageStore::new(config.storage_key.clone());
    let scheduler = IntervalScheduler::new(Rc::new(|| {
        with_engine(|engine| engine.tick());
    }));

    // Listeners go on before the engine is stored, so a failed mount leaves
    // the slot empty and can be retried.
    let on_click = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        log::debug!("start clicked");
        with_engine(|engine| engine.start());
    }) as Box<dyn FnMut(_)>);
    let on_key = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        log::trace!("key pressed {key:?}");
        with_engine(|engine| engine.guess_key(&key));
    }) as Box<dyn FnMut(_)>);

    start_button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    if let Err(err) = doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref()) {
        let _ = start_button.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        return Err(err);
    }
    on_click.forget();
    on_key.forget();

    let engine = RoundEngine::new(config, store, presenter, scheduler, OsRandom);
    ENGINE.with(|cell| cell.replace(Some(engine)));

    Ok(())
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    mount(GameConfig::default())
}

/// Same as `start_game`, with a JSON object overriding any `GameConfig` fields.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(config)
}

/// Programmatic start, equivalent to clicking the start button.
#[wasm_bindgen]
pub fn request_start() -> bool {
    with_engine(|engine| engine.start()).unwrap_or(false)
}

/// Programmatic key press. Returns whether the key uncovered any letters.
#[wasm_bindgen]
pub fn submit_guess(key: &str) -> bool {
    matches!(with_engine(|engine| engine.guess_key(key)), Some(GuessResult::Revealed(_)))
}

#[derive(Serialize)]
struct Snapshot<'a> {
    round: &'a RoundState,
    score: ScoreRecord,
}

/// JSON view of the current round and scoreboard, for debugging from the
/// console. `None` before the game is mounted.
#[wasm_bindgen]
pub fn game_snapshot() -> Option<String> {
    with_engine(|engine| {
        let snap = Snapshot { round: engine.state(), score: engine.score() };
        serde_json::to_string(&snap).ok()
    })
    .flatten()
}
