pub mod pointer;
pub mod resize;
pub mod sensors;

use crate::context::ParallaxContext;
use std::rc::Rc;

/// Attach every listener the instance needs. Sensor wiring never fails the
/// construction; pointer and resize wiring do.
pub fn wire_all(ctx: &Rc<ParallaxContext>) -> anyhow::Result<()> {
    pointer::wire_pointermove(ctx)?;
    resize::wire_window_resize(ctx)?;
    resize::observe_base(ctx);
    sensors::init_sensors(ctx);
    Ok(())
}
