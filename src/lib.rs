#![cfg(target_arch = "wasm32")]
//! Web front end: DOM layers moved by pointer and device sensors.
//!
//! ```js
//! const parallax = new Parallax({ containerId: "parallaxContainer" });
//! button.addEventListener("click", parallax.gyroPermissionHandler());
//! ```
use parallax_core::{ParallaxError, ParallaxOptions, PermissionState};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
mod context;
mod dom;
mod events;
mod frame;
mod permission;
mod timer;

use context::ParallaxContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web loaded");
    Ok(())
}

#[wasm_bindgen]
pub struct Parallax {
    ctx: Rc<ParallaxContext>,
}

#[wasm_bindgen]
impl Parallax {
    /// Throws when the options are malformed or the container is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Parallax, JsValue> {
        let options: ParallaxOptions = serde_wasm_bindgen::from_value(options).map_err(|e| {
            JsValue::from_str(
                &ParallaxError::InvalidOption {
                    name: "options",
                    reason: e.to_string(),
                }
                .to_string(),
            )
        })?;
        let ctx = context::build(options).map_err(|e| {
            log::error!("[parallax] {e}");
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Parallax { ctx })
    }

    /// Start the sensor permission prompt. Call from a user gesture.
    #[wasm_bindgen(js_name = requestGyroPermission)]
    pub fn request_gyro_permission(&self) {
        events::sensors::request_permission(&self.ctx);
    }

    /// `requestGyroPermission` as a standalone function, ready to pass to
    /// `addEventListener`.
    #[wasm_bindgen(js_name = gyroPermissionHandler)]
    pub fn gyro_permission_handler(&self) -> js_sys::Function {
        let weak = Rc::downgrade(&self.ctx);
        Closure::wrap(Box::new(move || {
            if let Some(ctx) = weak.upgrade() {
                events::sensors::request_permission(&ctx);
            }
        }) as Box<dyn FnMut()>)
        .into_js_value()
        .unchecked_into()
    }

    /// Re-anchor both sensor calibrations on their next sample.
    pub fn recalibrate(&self) {
        self.ctx.controller.borrow_mut().request_reanchor();
    }

    #[wasm_bindgen(getter, js_name = inputX)]
    pub fn input_x(&self) -> f64 {
        self.ctx.controller.borrow().input().x
    }

    #[wasm_bindgen(getter, js_name = inputY)]
    pub fn input_y(&self) -> f64 {
        self.ctx.controller.borrow().input().y
    }

    #[wasm_bindgen(getter, js_name = permissionState)]
    pub fn permission_state(&self) -> String {
        match events::sensors::permission_state(&self.ctx) {
            PermissionState::AwaitingConsent => "awaiting-consent",
            PermissionState::Requesting => "requesting",
            PermissionState::Attached => "attached",
            PermissionState::Denied => "denied",
            PermissionState::Unsupported => "unsupported",
        }
        .to_owned()
    }
}
