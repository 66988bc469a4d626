//! `requestAnimationFrame` backed counter driver

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::wasm_bindgen::{JsCast, closure::Closure};
use leptos::web_sys;

use crate::core::animation::{CounterAnimation, CounterDriver, FrameScheduler};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Schedules a shared callback with `window.requestAnimationFrame`
pub struct RafScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(?err, "requestAnimationFrame failed");
                None
            }
        }
    }

    fn cancel(&mut self, token: i32) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(token) {
                tracing::warn!(?err, "cancelAnimationFrame failed");
            }
        }
    }
}

/// Handle for starting a frame-driven counter
#[derive(Clone, Copy)]
pub struct CounterHandle {
    driver: StoredValue<Rc<RefCell<CounterDriver<RafScheduler>>>, LocalStorage>,
}

impl CounterHandle {
    /// Start counting. Later calls are no-ops.
    pub fn start(&self) {
        self.driver.try_with_value(|driver| {
            if let Ok(mut driver) = driver.try_borrow_mut() {
                driver.start();
            }
        });
    }
}

/// Create a counter whose displayed value is written to `display` on every
/// frame. The pending frame is cancelled when the owner is cleaned up.
pub fn use_frame_counter(animation: CounterAnimation, display: RwSignal<u64>) -> CounterHandle {
    let callback_slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let driver = Rc::new(RefCell::new(CounterDriver::new(
        animation,
        RafScheduler {
            callback: callback_slot.clone(),
        },
    )));

    let weak = Rc::downgrade(&driver);
    let callback: FrameCallback = Closure::new(move |timestamp: f64| {
        // Release the strong reference before notifying subscribers
        let value = {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            let Ok(mut driver) = driver.try_borrow_mut() else {
                return;
            };
            driver.on_frame(timestamp)
        };
        if let Some(value) = value {
            display.set(value);
        }
    });
    *callback_slot.borrow_mut() = Some(callback);

    let stored = StoredValue::new_local(driver);
    on_cleanup(move || {
        stored.try_with_value(|driver| {
            if let Ok(mut driver) = driver.try_borrow_mut() {
                driver.stop();
            }
        });
    });

    CounterHandle { driver: stored }
}
