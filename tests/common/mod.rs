// In-memory element and container implementing the capability traits, so
// registry, sizing and transform passes run on the host.

#![allow(dead_code)]

use glam::DVec2;
use parallax_core::error::Result;
use parallax_core::{
    ParallaxContainer, ParallaxElement, ATTR_BASE, ATTR_DEPTH, ATTR_MAX_RANGE, ATTR_PLACEHOLDER,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    attributes: HashMap<String, String>,
    size: DVec2,
    transform: Option<String>,
    width: Option<String>,
    height: Option<String>,
    children: Vec<MockElement>,
}

#[derive(Clone, Debug, Default)]
pub struct MockElement(Rc<RefCell<Inner>>);

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sized(width: f64, height: f64) -> Self {
        let el = Self::new();
        el.set_offset_size(width, height);
        el
    }

    pub fn layer(depth: &str, max_range: &str) -> Self {
        Self::new()
            .with_attr(ATTR_DEPTH, depth)
            .with_attr(ATTR_MAX_RANGE, max_range)
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.set_offset_size(width, height);
        self
    }

    pub fn set_offset_size(&self, width: f64, height: f64) {
        self.0.borrow_mut().size = DVec2::new(width, height);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.0.borrow().attributes.contains_key(name)
    }

    pub fn transform(&self) -> Option<String> {
        self.0.borrow().transform.clone()
    }

    pub fn style_size(&self) -> (Option<String>, Option<String>) {
        let inner = self.0.borrow();
        (inner.width.clone(), inner.height.clone())
    }

    pub fn push_child(&self, child: MockElement) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn children(&self) -> Vec<MockElement> {
        self.0.borrow().children.clone()
    }

    pub fn same(&self, other: &MockElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ParallaxElement for MockElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn offset_size(&self) -> DVec2 {
        self.0.borrow().size
    }

    fn set_transform(&self, value: &str) -> Result<()> {
        self.0.borrow_mut().transform = Some(value.to_owned());
        Ok(())
    }

    fn set_size(&self, width: &str, height: &str) -> Result<()> {
        let mut inner = self.0.borrow_mut();
        inner.width = Some(width.to_owned());
        inner.height = Some(height.to_owned());
        Ok(())
    }
}

/// A container whose direct children stand in for all descendants.
#[derive(Clone, Debug, Default)]
pub struct MockContainer {
    pub root: MockElement,
}

impl MockContainer {
    pub fn new(children: Vec<MockElement>) -> Self {
        let root = MockElement::new();
        for child in children {
            root.push_child(child);
        }
        Self { root }
    }
}

impl ParallaxContainer for MockContainer {
    type Element = MockElement;

    fn element(&self) -> MockElement {
        self.root.clone()
    }

    fn layers(&self) -> Vec<MockElement> {
        self.root
            .children()
            .into_iter()
            .filter(|c| c.has_attr(ATTR_DEPTH))
            .collect()
    }

    fn marked_base(&self) -> Option<MockElement> {
        self.root.children().into_iter().find(|c| c.has_attr(ATTR_BASE))
    }

    fn first_child(&self) -> Option<MockElement> {
        self.root.children().into_iter().next()
    }

    fn append_placeholder(&self) -> Result<MockElement> {
        let placeholder = MockElement::new().with_attr(ATTR_PLACEHOLDER, "");
        self.root.push_child(placeholder.clone());
        Ok(placeholder)
    }
}

pub fn options(container_id: &str) -> parallax_core::ResolvedOptions {
    parallax_core::ParallaxOptions::new(container_id)
        .resolve(DVec2::new(400.0, 800.0))
        .expect("default options resolve")
}
