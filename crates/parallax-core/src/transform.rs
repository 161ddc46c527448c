//! Layer translation math and the per-frame apply pass.

use crate::constants::CSS_PX_PRECISION;
use crate::element::ParallaxElement;
use crate::registry::LayerRegistry;
use crate::state::ParallaxController;
use glam::DVec2;

/// `input * depth * modifier * axis_center`, clamped per axis to
/// `[-max_range, max_range]`.
///
/// `input` is normalized (pointer: -1..1 across the base element), so scaling
/// by `axis_center` (half the base size) brings it back to pixels. Pointer and
/// sensor input therefore move layers at comparable rates.
#[inline]
pub fn compute_delta(
    input: DVec2,
    depth: f64,
    modifier: f64,
    axis_center: DVec2,
    max_range: f64,
) -> DVec2 {
    let range = max_range.abs();
    let raw = input * depth * modifier * axis_center;
    DVec2::new(clamp_axis(raw.x, range), clamp_axis(raw.y, range))
}

#[inline]
fn clamp_axis(value: f64, range: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-range, range)
    }
}

/// CSS length with a bounded number of decimals and no negative zero.
pub fn format_px(value: f64) -> String {
    let rounded = (value * CSS_PX_PRECISION).round() / CSS_PX_PRECISION;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}px")
}

#[inline]
pub fn css_translate(delta: DVec2) -> String {
    format!("translate({}, {})", format_px(delta.x), format_px(delta.y))
}

/// Write every layer's transform from the controller's current input.
/// Returns how many layers were written.
pub fn apply_transforms<E: ParallaxElement>(
    registry: &LayerRegistry<E>,
    controller: &ParallaxController,
) -> usize {
    let axis_center = registry.base().offset_size() * 0.5;
    let mut written = 0;
    for layer in registry.layers() {
        let delta = controller.layer_translation(&layer.params, axis_center);
        match layer.element.set_transform(&css_translate(delta)) {
            Ok(()) => written += 1,
            Err(e) => log::warn!("[transform] layer write failed: {e}"),
        }
    }
    written
}
