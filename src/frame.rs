use crate::context::ParallaxContext;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Schedule a transform pass on the next animation frame. Requests made
/// while one is pending collapse into it.
pub fn request_frame(ctx: &Rc<ParallaxContext>) {
    if !ctx.frame_gate.borrow_mut().request() {
        return;
    }
    let weak = Rc::downgrade(ctx);
    let tick = Closure::once_into_js(move || {
        if let Some(ctx) = weak.upgrade() {
            ctx.frame_gate.borrow_mut().begin_frame();
            ctx.apply_frame();
        }
    });
    let scheduled = web::window()
        .map(|w| w.request_animation_frame(tick.unchecked_ref()).is_ok())
        .unwrap_or(false);
    if !scheduled {
        log::warn!("[frame] requestAnimationFrame unavailable; transforms not applied");
        ctx.frame_gate.borrow_mut().begin_frame();
    }
}
