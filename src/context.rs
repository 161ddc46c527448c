use crate::dom::{self, DomContainer, DomElement, ListenerHandle};
use crate::events;
use crate::frame;
use crate::timer::DebouncedTimer;
use glam::DVec2;
use parallax_core::{
    apply_transforms, FrameGate, LayerRegistry, ParallaxContainer, ParallaxController,
    ParallaxOptions, PermissionFlow, SizeOverride, SizeSync, TiltSample,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Everything one `Parallax` instance owns. Event closures hold a `Weak`
/// to it, so dropping the instance tears the listeners down.
pub struct ParallaxContext {
    pub controller: RefCell<ParallaxController>,
    pub registry: LayerRegistry<DomElement>,
    pub container: DomElement,
    pub sizing: RefCell<SizeSync>,
    pub frame_gate: RefCell<FrameGate>,
    pub permission: RefCell<PermissionFlow>,

    pub pointer: DebouncedTimer<DVec2>,
    pub orientation: DebouncedTimer<TiltSample>,
    pub motion: DebouncedTimer<TiltSample>,
    pub window_resize: DebouncedTimer<()>,
    pub recalibration: Option<DebouncedTimer<()>>,

    pub listeners: RefCell<Vec<ListenerHandle>>,
    pub gesture_listeners: RefCell<Vec<ListenerHandle>>,
    pub size_observer: RefCell<Option<events::resize::SizeObserver>>,
}

impl ParallaxContext {
    pub fn apply_frame(&self) {
        let controller = self.controller.borrow();
        let written = apply_transforms(&self.registry, &controller);
        log::trace!("[frame] layers written={written}");
    }

    /// Override applied to every container size sync.
    pub fn size_override(&self) -> SizeOverride {
        if self.controller.borrow().options().match_viewport_width {
            SizeOverride {
                width: Some(dom::viewport_size().x),
                height: None,
            }
        } else {
            SizeOverride::default()
        }
    }

    pub fn sync_size(&self) -> bool {
        let overrides = self.size_override();
        match self
            .sizing
            .borrow_mut()
            .sync(&self.container, self.registry.base(), overrides)
        {
            Ok(changed) => changed,
            Err(e) => {
                log::warn!("[sizing] {e}");
                false
            }
        }
    }
}

/// Wrap a context method as a timer handler holding only a `Weak`.
fn handler<T>(
    weak: &Weak<ParallaxContext>,
    f: fn(&Rc<ParallaxContext>, T),
) -> impl FnMut(T) + 'static
where
    T: 'static,
{
    let weak = weak.clone();
    move |value| {
        if let Some(ctx) = weak.upgrade() {
            f(&ctx, value);
        }
    }
}

pub fn build(options: ParallaxOptions) -> anyhow::Result<Rc<ParallaxContext>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let resolved = options.resolve(dom::viewport_size())?;
    let container = DomContainer::find(&document, &resolved.container_id)?;
    let registry = LayerRegistry::discover(&container)?;

    let mut controller = ParallaxController::new(resolved.clone());
    controller.set_screen_orientation(dom::screen_orientation());
    log::info!(
        "[parallax] #{} layers={} sensitivity={:.2}",
        resolved.container_id,
        registry.layers().len(),
        resolved.sensitivity
    );

    let ctx = Rc::new_cyclic(|weak| ParallaxContext {
        controller: RefCell::new(controller),
        container: container.element(),
        registry,
        sizing: RefCell::new(SizeSync::new()),
        frame_gate: RefCell::new(FrameGate::default()),
        permission: RefCell::new(PermissionFlow::unsupported()),
        pointer: DebouncedTimer::new(
            resolved.pointer_debounce_ms,
            handler(weak, events::pointer::apply_pointer),
        ),
        orientation: DebouncedTimer::new(
            resolved.orientation_debounce_ms,
            handler(weak, events::sensors::apply_orientation),
        ),
        motion: DebouncedTimer::new(
            resolved.motion_debounce_ms,
            handler(weak, events::sensors::apply_motion),
        ),
        window_resize: DebouncedTimer::new(
            resolved.resize_debounce_ms,
            handler(weak, events::resize::apply_window_resize),
        ),
        recalibration: resolved.recalibration_delay_ms.map(|delay| {
            DebouncedTimer::new(delay, handler(weak, events::sensors::apply_recalibration))
        }),
        listeners: RefCell::new(Vec::new()),
        gesture_listeners: RefCell::new(Vec::new()),
        size_observer: RefCell::new(None),
    });

    ctx.sync_size();
    events::wire_all(&ctx)?;
    frame::request_frame(&ctx);
    Ok(ctx)
}
