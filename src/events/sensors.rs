//! Device orientation and motion: permission gating, listeners, and the
//! debounced handlers feeding the controller.

use crate::constants::*;
use crate::context::ParallaxContext;
use crate::dom;
use crate::frame;
use crate::permission::{self, SensorSupport};
use parallax_core::{PermissionFlow, PermissionState, PermissionTally, TiltSample};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Sensor APIs this instance wants, by its options.
fn wanted_apis(ctx: &ParallaxContext) -> Vec<&'static str> {
    let controller = ctx.controller.borrow();
    let options = controller.options();
    let mut apis = Vec::with_capacity(2);
    if options.enable_orientation {
        apis.push(API_DEVICE_ORIENTATION);
    }
    if options.enable_motion {
        apis.push(API_DEVICE_MOTION);
    }
    apis
}

pub fn init_sensors(ctx: &Rc<ParallaxContext>) {
    let support = wanted_apis(ctx)
        .into_iter()
        .map(permission::sensor_support)
        .collect::<Vec<_>>();

    if support.iter().all(|s| *s == SensorSupport::Unsupported) {
        log::warn!("[permission] device sensors unsupported or disabled; pointer input only");
        *ctx.permission.borrow_mut() = PermissionFlow::unsupported();
        return;
    }
    if support.contains(&SensorSupport::NeedsPermission) {
        log::info!("[permission] sensors need consent; waiting for a user gesture");
        *ctx.permission.borrow_mut() = PermissionFlow::awaiting_consent();
        wire_permission_gesture(ctx);
        return;
    }
    *ctx.permission.borrow_mut() = PermissionFlow::attached();
    attach_sensor_listeners(ctx);
}

/// Click/touch on the permission trigger (or anywhere in the document)
/// starts the prompt.
fn wire_permission_gesture(ctx: &Rc<ParallaxContext>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let target: web::EventTarget = match document.query_selector(PERMISSION_TRIGGER_SELECTOR) {
        Ok(Some(el)) => el.into(),
        _ => document.into(),
    };
    for event in [EVENT_CLICK, EVENT_TOUCH_END] {
        let weak = Rc::downgrade(ctx);
        match dom::listen(&target, event, move |_ev: web::Event| {
            if let Some(ctx) = weak.upgrade() {
                request_permission(&ctx);
            }
        }) {
            Ok(handle) => ctx.gesture_listeners.borrow_mut().push(handle),
            Err(e) => log::error!("[permission] {e}"),
        }
    }
}

/// Prompt for sensor access. No-op unless the flow is awaiting consent or
/// was previously denied.
pub fn request_permission(ctx: &Rc<ParallaxContext>) {
    let start = ctx.permission.borrow_mut().begin_request();
    let Some(start) = start else {
        log::info!(
            "[permission] request ignored in state {:?}",
            ctx.permission.borrow().state()
        );
        return;
    };
    if start.detach_gesture {
        for handle in ctx.gesture_listeners.borrow_mut().drain(..) {
            handle.detach();
        }
    }

    // requestPermission must be called inside the gesture; only await later
    let mut promises = Vec::new();
    let mut tally = PermissionTally::default();
    for api in wanted_apis(ctx) {
        match permission::sensor_support(api) {
            SensorSupport::NeedsPermission => match permission::request_permission(api) {
                Ok(p) => promises.push((api, p)),
                Err(e) => {
                    log::error!("[permission] {api}: {e}");
                    tally.record(false);
                }
            },
            SensorSupport::Available | SensorSupport::Unsupported => {}
        }
    }

    let ctx = ctx.clone();
    spawn_local(async move {
        for (api, promise) in promises {
            let granted = match permission::await_permission(promise).await {
                Ok(granted) => granted,
                Err(e) => {
                    log::error!("[permission] {api} request failed: {e}");
                    false
                }
            };
            if !granted {
                log::warn!("[permission] {api} denied");
            }
            tally.record(granted);
        }
        let attach = ctx.permission.borrow_mut().finish(tally.granted());
        if attach {
            log::info!("[permission] granted; attaching sensor listeners");
            attach_sensor_listeners(&ctx);
        } else {
            log::error!("[permission] sensor access denied; pointer input only");
        }
    });
}

fn attach_sensor_listeners(ctx: &Rc<ParallaxContext>) {
    let Some(window) = web::window() else {
        return;
    };
    let (orientation, motion) = {
        let controller = ctx.controller.borrow();
        let options = controller.options();
        (options.enable_orientation, options.enable_motion)
    };

    if orientation {
        let weak = Rc::downgrade(ctx);
        match dom::listen(&window, EVENT_DEVICE_ORIENTATION, move |ev: web::Event| {
            let (Some(ctx), Some(ev)) = (weak.upgrade(), ev.dyn_ref::<web::DeviceOrientationEvent>())
            else {
                return;
            };
            ctx.orientation.schedule(TiltSample {
                beta: ev.beta(),
                gamma: ev.gamma(),
            });
        }) {
            Ok(handle) => ctx.listeners.borrow_mut().push(handle),
            Err(e) => log::error!("[input] {e}"),
        }
    }

    if motion {
        let weak = Rc::downgrade(ctx);
        match dom::listen(&window, EVENT_DEVICE_MOTION, move |ev: web::Event| {
            let (Some(ctx), Some(ev)) = (weak.upgrade(), ev.dyn_ref::<web::DeviceMotionEvent>())
            else {
                return;
            };
            let sample = ev
                .rotation_rate()
                .map(|rate| TiltSample {
                    beta: rate.beta(),
                    gamma: rate.gamma(),
                })
                .unwrap_or_default();
            ctx.motion.schedule(sample);
        }) {
            Ok(handle) => ctx.listeners.borrow_mut().push(handle),
            Err(e) => log::error!("[input] {e}"),
        }
    }
}

pub fn apply_orientation(ctx: &Rc<ParallaxContext>, sample: TiltSample) {
    let changed = {
        let mut controller = ctx.controller.borrow_mut();
        controller.set_screen_orientation(dom::screen_orientation());
        controller.on_orientation(sample)
    };
    if !changed {
        log::debug!("[input] orientation event without beta/gamma ignored");
        return;
    }
    if let Some(timer) = &ctx.recalibration {
        timer.schedule(());
    }
    frame::request_frame(ctx);
}

pub fn apply_motion(ctx: &Rc<ParallaxContext>, sample: TiltSample) {
    let changed = {
        let mut controller = ctx.controller.borrow_mut();
        controller.set_screen_orientation(dom::screen_orientation());
        controller.on_motion(sample)
    };
    if changed {
        frame::request_frame(ctx);
    } else {
        log::debug!("[input] motion event without rotation rate ignored");
    }
}

/// Quiet period after the last orientation sample elapsed.
pub fn apply_recalibration(ctx: &Rc<ParallaxContext>, _: ()) {
    log::debug!("[calibration] orientation idle; re-anchoring on next sample");
    ctx.controller.borrow_mut().request_orientation_reanchor();
}

pub fn permission_state(ctx: &ParallaxContext) -> PermissionState {
    ctx.permission.borrow().state()
}
