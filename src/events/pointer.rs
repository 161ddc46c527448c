use crate::constants::EVENT_POINTER_MOVE;
use crate::context::ParallaxContext;
use crate::dom;
use crate::frame;
use glam::DVec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(ctx: &Rc<ParallaxContext>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak = Rc::downgrade(ctx);
    let handle = dom::listen(&window, EVENT_POINTER_MOVE, move |ev: web::Event| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            ctx.pointer
                .schedule(DVec2::new(ev.client_x() as f64, ev.client_y() as f64));
        }
    })?;
    ctx.listeners.borrow_mut().push(handle);
    Ok(())
}

/// Debounced pointer handler: the last position of a burst.
pub fn apply_pointer(ctx: &Rc<ParallaxContext>, pointer: DVec2) {
    let (origin, size) = ctx.registry.pointer_rect(ctx.container.client_origin());
    let changed = ctx
        .controller
        .borrow_mut()
        .on_pointer(pointer, origin, size);
    if changed {
        frame::request_frame(ctx);
    }
}
