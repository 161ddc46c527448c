use parallax_core::Debounce;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `setTimeout`-backed debounce: each `schedule` cancels the pending timeout
/// and the handler runs `delay_ms` after the last call with the last value.
///
/// The timeout carries the generation it was scheduled for, so a callback
/// that fires despite `clearTimeout` finds nothing to take.
pub struct DebouncedTimer<T> {
    delay_ms: i32,
    pending: Rc<RefCell<Debounce<T>>>,
    handle: Cell<Option<i32>>,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl<T: 'static> DebouncedTimer<T> {
    pub fn new(delay_ms: u32, mut handler: impl FnMut(T) + 'static) -> Self {
        let pending = Rc::new(RefCell::new(Debounce::new()));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move |generation: JsValue| {
            let Some(generation) = generation.as_f64() else {
                return;
            };
            let value = pending_cb.borrow_mut().take(generation as u64);
            if let Some(value) = value {
                handler(value);
            }
        }) as Box<dyn FnMut(JsValue)>);
        Self {
            delay_ms: delay_ms.min(i32::MAX as u32) as i32,
            pending,
            handle: Cell::new(None),
            callback,
        }
    }

    pub fn schedule(&self, value: T) {
        let generation = self.pending.borrow_mut().push(value);
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.handle.take() {
            window.clear_timeout_with_handle(handle);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_1(
            self.callback.as_ref().unchecked_ref(),
            self.delay_ms,
            &JsValue::from_f64(generation as f64),
        ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => log::warn!("[timer] setTimeout failed: {:?}", e),
        }
    }
}

impl<T> Drop for DebouncedTimer<T> {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }
}
