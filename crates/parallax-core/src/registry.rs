//! Layer discovery and base element resolution.

use crate::element::{ParallaxContainer, ParallaxElement};
use crate::error::Result;
use crate::layer::LayerParams;
use glam::DVec2;

/// How the base element was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseResolution {
    Marked,
    FirstChild,
    Placeholder,
}

#[derive(Clone, Debug)]
pub struct Layer<E> {
    pub element: E,
    pub params: LayerParams,
}

pub struct LayerRegistry<E> {
    layers: Vec<Layer<E>>,
    base: E,
    base_resolution: BaseResolution,
}

impl<E: ParallaxElement> LayerRegistry<E> {
    pub fn discover<C>(container: &C) -> Result<Self>
    where
        C: ParallaxContainer<Element = E>,
    {
        let layers = container
            .layers()
            .into_iter()
            .map(|element| {
                let params = LayerParams::from_element(&element);
                Layer { element, params }
            })
            .collect::<Vec<_>>();
        let (base, base_resolution) = resolve_base(container)?;
        log::info!(
            "[registry] layers={} base={:?}",
            layers.len(),
            base_resolution
        );
        Ok(Self {
            layers,
            base,
            base_resolution,
        })
    }

    pub fn layers(&self) -> &[Layer<E>] {
        &self.layers
    }

    pub fn base(&self) -> &E {
        &self.base
    }

    pub fn base_resolution(&self) -> BaseResolution {
        self.base_resolution
    }

    /// Origin and size the pointer is normalized against: the container's
    /// client origin with the base's layout size. The base may itself be a
    /// layer, so its client rect would follow the translation written to it.
    pub fn pointer_rect(&self, container_origin: DVec2) -> (DVec2, DVec2) {
        (container_origin, self.base.offset_size())
    }
}

/// Marker first, then the first child, then a synthesized placeholder so
/// size queries always have an element to read.
pub fn resolve_base<C: ParallaxContainer>(container: &C) -> Result<(C::Element, BaseResolution)> {
    if let Some(base) = container.marked_base() {
        return Ok((base, BaseResolution::Marked));
    }
    log::warn!("[registry] no base dimensions marker; falling back to first child");
    if let Some(child) = container.first_child() {
        return Ok((child, BaseResolution::FirstChild));
    }
    log::warn!("[registry] container has no children; appending placeholder base element");
    let placeholder = container.append_placeholder()?;
    Ok((placeholder, BaseResolution::Placeholder))
}
