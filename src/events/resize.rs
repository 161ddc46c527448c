use crate::constants::EVENT_RESIZE;
use crate::context::ParallaxContext;
use crate::dom;
use crate::frame;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps a `ResizeObserver` on the base element; disconnects on drop.
pub struct SizeObserver {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn wire_window_resize(ctx: &Rc<ParallaxContext>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak = Rc::downgrade(ctx);
    let handle = dom::listen(&window, EVENT_RESIZE, move |_ev: web::Event| {
        if let Some(ctx) = weak.upgrade() {
            ctx.window_resize.schedule(());
        }
    })?;
    ctx.listeners.borrow_mut().push(handle);
    Ok(())
}

pub fn apply_window_resize(ctx: &Rc<ParallaxContext>, _: ()) {
    ctx.sync_size();
    // axis centers follow the base size even when the container didn't change
    frame::request_frame(ctx);
}

/// Observe the base element's box. Missing `ResizeObserver` support leaves
/// only the window resize path.
pub fn observe_base(ctx: &Rc<ParallaxContext>) {
    let weak = Rc::downgrade(ctx);
    let callback = Closure::wrap(Box::new(move || {
        if let Some(ctx) = weak.upgrade() {
            if ctx.sync_size() {
                frame::request_frame(&ctx);
            }
        }
    }) as Box<dyn FnMut()>);
    let observer = match web::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[sizing] ResizeObserver unavailable: {:?}", e);
            return;
        }
    };
    observer.observe(&ctx.registry.base().0);
    *ctx.size_observer.borrow_mut() = Some(SizeObserver {
        observer,
        _callback: callback,
    });
}
