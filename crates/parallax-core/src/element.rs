//! Capability traits the pipeline is written against.
//!
//! The web front end implements them for `web_sys::HtmlElement`; tests use an
//! in-memory element.

use crate::error::Result;
use glam::DVec2;

/// An addressable UI element with box metrics, settable transform/size style
/// and attribute metadata.
pub trait ParallaxElement: Clone {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Layout size (`offsetWidth`, `offsetHeight`).
    fn offset_size(&self) -> DVec2;

    fn set_transform(&self, value: &str) -> Result<()>;

    fn set_size(&self, width: &str, height: &str) -> Result<()>;
}

/// The element hosting the layers.
pub trait ParallaxContainer {
    type Element: ParallaxElement;

    /// The container itself, for sizing.
    fn element(&self) -> Self::Element;

    /// Descendants carrying a depth attribute, in document order.
    fn layers(&self) -> Vec<Self::Element>;

    /// Descendant carrying the base-dimensions marker.
    fn marked_base(&self) -> Option<Self::Element>;

    fn first_child(&self) -> Option<Self::Element>;

    /// Create an empty element, append it to the container and return it.
    fn append_placeholder(&self) -> Result<Self::Element>;
}
