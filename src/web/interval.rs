//! Countdown registration on `window.setInterval`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::engine::Scheduler;

/// A live interval: its id plus the closure the browser calls.
pub struct IntervalHandle {
    id: i32,
    closure: Closure<dyn FnMut()>,
}

pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
    // Cancellation usually happens from inside the interval's own callback
    // (the last tick ends the round), so the closure cannot be freed there.
    // It is parked here and released on the next registration.
    retired: Option<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(on_tick: Rc<dyn Fn()>) -> Self {
        Self { on_tick, retired: None }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn schedule_repeating(&mut self, period_ms: u32) -> Option<IntervalHandle> {
        self.retired = None;
        let win = window()?;
        let on_tick = self.on_tick.clone();
        let closure = Closure::wrap(Box::new(move || on_tick()) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match win.set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), timeout) {
            Ok(id) => Some(IntervalHandle { id, closure }),
            Err(err) => {
                log::error!("setInterval failed: {err:?}");
                None
            }
        }
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(handle.id);
        }
        self.retired = Some(handle.closure);
    }
}
