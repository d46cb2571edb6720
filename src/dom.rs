//! Thin helpers over `web_sys` shared by every behavior.
//!
//! Behaviors keep their state machines generic over [`Surface`] so the
//! same code drives the live document and the in-memory elements used in
//! tests.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList,
    ScrollBehavior, ScrollIntoViewOptions,
};

use crate::error::{BehaviorError, Result};

/// The element operations behaviors are allowed to perform.
pub trait Surface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_style(&self, property: &str, value: &str);
    fn parent(&self) -> Option<Self>
    where
        Self: Sized;
}

/// `el` itself or its nearest ancestor carrying `class`.
pub fn closest_with_class<E: Surface>(el: E, class: &str) -> Option<E> {
    let mut current = Some(el);
    while let Some(el) = current {
        if el.has_class(class) {
            return Some(el);
        }
        current = el.parent();
    }
    None
}

impl Surface for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = Element::set_attribute(self, name, value) {
            warn!("Failed to set {}: {:?}", name, e);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.dyn_ref::<HtmlElement>() else {
            warn!("Cannot style a non-HTML element");
            return;
        };
        if let Err(e) = html.style().set_property(property, value) {
            warn!("Failed to set style {}: {:?}", property, e);
        }
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BehaviorError::Js("no document available".to_string()))
}

/// First element matching `selector`; a missing element fails the caller's setup.
pub fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| BehaviorError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

/// Same as [`query_all`] but scoped to an element's subtree.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(nodes: NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The element an event was dispatched to, if it was an element at all.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Listeners are never removed; the page owns them until unload.
    callback.forget();
    Ok(())
}

/// Attaches `handler` for a single dispatch of `event`.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let callback = Closure::<dyn FnMut()>::once(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

pub fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}


#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::*;

    #[test]
    fn closest_matches_self_then_ancestors() {
        let tab = FakeElement::with_classes(&["operations__tab"]);
        let label = FakeElement::with_classes(&["label"]).with_parent(&tab);

        assert_eq!(closest_with_class(tab.clone(), "operations__tab"), Some(tab.clone()));
        assert_eq!(closest_with_class(label, "operations__tab"), Some(tab));
    }

    #[test]
    fn closest_stops_at_the_root() {
        let strip = FakeElement::with_classes(&["operations__tab-container"]);
        let gap = FakeElement::default().with_parent(&strip);

        assert_eq!(closest_with_class(gap, "operations__tab"), None);
        assert_eq!(closest_with_class(strip, "operations__tab"), None);
    }
}
