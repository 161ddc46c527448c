use crate::element::ParallaxElement;
use crate::error::Result;
use crate::transform::format_px;
use glam::DVec2;

/// Explicit values replacing the base element's size on one or both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeOverride {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Keeps the container's width/height in step with the base element.
#[derive(Clone, Debug, Default)]
pub struct SizeSync {
    last: Option<DVec2>,
}

impl SizeSync {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn target_size(base: DVec2, overrides: SizeOverride) -> DVec2 {
        DVec2::new(
            overrides.width.unwrap_or(base.x),
            overrides.height.unwrap_or(base.y),
        )
    }

    /// Write the container size if it differs from the last write.
    /// Returns whether anything was written.
    pub fn sync<E: ParallaxElement>(
        &mut self,
        container: &E,
        base: &E,
        overrides: SizeOverride,
    ) -> Result<bool> {
        let size = Self::target_size(base.offset_size(), overrides);
        if self.last == Some(size) {
            return Ok(false);
        }
        container.set_size(&format_px(size.x), &format_px(size.y))?;
        self.last = Some(size);
        log::debug!("[sizing] container={}x{}", size.x, size.y);
        Ok(true)
    }
}
