//! DOM-backed presenter for the stock page layout.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::engine::Presenter;
use crate::round::{display_revealed, Outcome, RoundState};

const HIDE_CLASS: &str = "hide";
const SUCCESS_CLASS: &str = "success";
const FAILURE_CLASS: &str = "failure";

pub const WINS_SELECTOR: &str = ".scoreboard__score__value--wins";
pub const LOSSES_SELECTOR: &str = ".scoreboard__score__value--losses";
pub const TIMER_SELECTOR: &str = ".gameboard__timer";
pub const CONTROLS_SELECTOR: &str = ".controls";
pub const START_BUTTON_SELECTOR: &str = ".controls__playgame";
pub const GAMEBOARD_SELECTOR: &str = ".gameboard";
pub const RESULT_SELECTOR: &str = ".gameboard__result";
pub const DISPLAY_SELECTOR: &str = ".gameboard__display";

/// Looks up a required element, failing with the selector name.
pub fn require(doc: &Document, selector: &str) -> Result<Element, JsValue> {
    doc.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element {selector}")))
}

pub struct DomPresenter {
    wins: Element,
    losses: Element,
    timer: Element,
    controls: Element,
    gameboard: Element,
    result: Element,
    display: Element,
}

impl DomPresenter {
    pub fn from_document(doc: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            wins: require(doc, WINS_SELECTOR)?,
            losses: require(doc, LOSSES_SELECTOR)?,
            timer: require(doc, TIMER_SELECTOR)?,
            controls: require(doc, CONTROLS_SELECTOR)?,
            gameboard: require(doc, GAMEBOARD_SELECTOR)?,
            result: require(doc, RESULT_SELECTOR)?,
            display: require(doc, DISPLAY_SELECTOR)?,
        })
    }
}

fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let res = if hidden { classes.add_1(HIDE_CLASS) } else { classes.remove_1(HIDE_CLASS) };
    if let Err(err) = res {
        log::warn!("could not toggle `{HIDE_CLASS}`: {err:?}");
    }
}

impl Presenter for DomPresenter {
    fn on_round_started(&mut self, round: &RoundState) {
        set_hidden(&self.controls, true);
        set_hidden(&self.result, true);
        self.timer.set_text_content(Some(&round.time_remaining().to_string()));
        set_hidden(&self.timer, false);
        set_hidden(&self.gameboard, false);
    }

    fn on_guess_display_changed(&mut self, revealed: &[char]) {
        self.display.set_text_content(Some(&display_revealed(revealed)));
    }

    fn on_tick(&mut self, time_remaining: u32) {
        self.timer.set_text_content(Some(&time_remaining.to_string()));
    }

    fn on_round_ended(&mut self, outcome: Outcome) {
        let classes = self.result.class_list();
        let class = match outcome {
            Outcome::Win => SUCCESS_CLASS,
            Outcome::Loss => FAILURE_CLASS,
        };
        if let Err(err) = classes.remove_2(SUCCESS_CLASS, FAILURE_CLASS).and_then(|_| classes.add_1(class)) {
            log::warn!("could not style result banner: {err:?}");
        }
        set_hidden(&self.timer, true);
        self.result.set_text_content(Some(outcome.message()));
        set_hidden(&self.result, false);
        set_hidden(&self.controls, false);
    }

    fn on_score_changed(&mut self, wins: u32, losses: u32) {
        self.wins.set_text_content(Some(&wins.to_string()));
        self.losses.set_text_content(Some(&losses.to_string()));
    }
}
