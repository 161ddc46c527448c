use crate::constants::*;
use glam::DVec2;
use parallax_core::{
    ParallaxContainer, ParallaxElement, ParallaxError, ScreenOrientation, ATTR_PLACEHOLDER,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `innerWidth` x `innerHeight` in CSS pixels, zero when unavailable.
pub fn viewport_size() -> DVec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            DVec2::new(width, height)
        })
        .unwrap_or(DVec2::ZERO)
}

pub fn screen_orientation() -> ScreenOrientation {
    web::window()
        .and_then(|w| w.screen().ok())
        .and_then(|s| s.orientation().angle().ok())
        .map(|angle| ScreenOrientation::from_angle(angle as i32))
        .unwrap_or_default()
}

#[inline]
fn dom_err(e: JsValue) -> ParallaxError {
    ParallaxError::Dom(format!("{:?}", e))
}

#[inline]
fn html_element(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

#[derive(Clone, Debug)]
pub struct DomElement(pub web::HtmlElement);

impl DomElement {
    /// Top-left corner of the client rect.
    #[inline]
    pub fn client_origin(&self) -> DVec2 {
        let rect = self.0.get_bounding_client_rect();
        DVec2::new(rect.left(), rect.top())
    }
}

impl ParallaxElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn offset_size(&self) -> DVec2 {
        DVec2::new(self.0.offset_width() as f64, self.0.offset_height() as f64)
    }

    fn set_transform(&self, value: &str) -> parallax_core::error::Result<()> {
        self.0
            .style()
            .set_property(STYLE_TRANSFORM, value)
            .map_err(dom_err)
    }

    fn set_size(&self, width: &str, height: &str) -> parallax_core::error::Result<()> {
        let style = self.0.style();
        style.set_property(STYLE_WIDTH, width).map_err(dom_err)?;
        style.set_property(STYLE_HEIGHT, height).map_err(dom_err)
    }
}

pub struct DomContainer {
    element: web::HtmlElement,
    document: web::Document,
}

impl DomContainer {
    pub fn find(document: &web::Document, id: &str) -> Result<Self, ParallaxError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| ParallaxError::ContainerNotFound(id.to_owned()))?;
        let element = html_element(element)
            .ok_or_else(|| ParallaxError::Dom(format!("#{id} is not an HTML element")))?;
        Ok(Self {
            element,
            document: document.clone(),
        })
    }
}

impl ParallaxContainer for DomContainer {
    type Element = DomElement;

    fn element(&self) -> DomElement {
        DomElement(self.element.clone())
    }

    fn layers(&self) -> Vec<DomElement> {
        let Ok(nodes) = self.element.query_selector_all(LAYER_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }

    fn marked_base(&self) -> Option<DomElement> {
        self.element
            .query_selector(BASE_SELECTOR)
            .ok()
            .flatten()
            .and_then(html_element)
            .map(DomElement)
    }

    fn first_child(&self) -> Option<DomElement> {
        self.element
            .first_element_child()
            .and_then(html_element)
            .map(DomElement)
    }

    fn append_placeholder(&self) -> parallax_core::error::Result<DomElement> {
        let el = self
            .document
            .create_element(PLACEHOLDER_TAG)
            .map_err(dom_err)?;
        el.set_attribute(ATTR_PLACEHOLDER, "").map_err(dom_err)?;
        self.element.append_child(&el).map_err(dom_err)?;
        html_element(el)
            .map(DomElement)
            .ok_or_else(|| ParallaxError::Dom("placeholder is not an HTML element".into()))
    }
}

/// An event listener that is removed when the handle is dropped.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl ListenerHandle {
    /// Remove the listener but keep the closure alive. Use this when the
    /// listener may be the one currently running.
    pub fn detach(mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(closure) = &self.closure {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<ListenerHandle> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("addEventListener({event}) failed: {:?}", e))?;
    Ok(ListenerHandle {
        target: target.clone(),
        event,
        closure: Some(closure),
    })
}
