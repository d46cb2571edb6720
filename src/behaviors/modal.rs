use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;

/// Dialog plus backdrop, always shown or hidden together.
pub struct Modal<E> {
    dialog: E,
    backdrop: E,
    hidden_class: String,
    open: bool,
}

impl<E: Surface> Modal<E> {
    pub fn new(dialog: E, backdrop: E, hidden_class: &str) -> Self {
        let open = !dialog.has_class(hidden_class);
        let modal = Self {
            dialog,
            backdrop,
            hidden_class: hidden_class.to_string(),
            open,
        };
        // Bring the backdrop in line with whatever the markup started with.
        modal.render();
        modal
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.render();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.render();
    }

    /// Returns true when the key dismissed the dialog.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    fn render(&self) {
        for el in [&self.dialog, &self.backdrop] {
            if self.open {
                el.remove_class(&self.hidden_class);
            } else {
                el.add_class(&self.hidden_class);
            }
        }
    }
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let selectors = &config.selectors;
    let dialog = dom::query(document, &selectors.modal)?;
    let backdrop = dom::query(document, &selectors.overlay)?;
    let close_button = dom::query(document, &selectors.close_modal)?;
    let triggers = dom::query_all(document, &selectors.open_modal)?;

    let modal = Rc::new(RefCell::new(Modal::new(
        dialog,
        backdrop.clone(),
        &config.classes.hidden,
    )));

    for trigger in &triggers {
        let modal = modal.clone();
        dom::listen(trigger, "click", move |e| {
            // Triggers are anchors; keep the page from jumping to `#`.
            e.prevent_default();
            modal.borrow_mut().open();
            debug!("Modal opened");
        })?;
    }

    for dismiss in [&close_button, &backdrop] {
        let modal = modal.clone();
        dom::listen(dismiss, "click", move |_| {
            modal.borrow_mut().close();
        })?;
    }

    {
        let modal = modal.clone();
        dom::listen(document, "keydown", move |e| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
                if modal.borrow_mut().handle_key(&key) {
                    debug!("Modal dismissed with Escape");
                }
            }
        })?;
    }

    debug!("Modal wired to {} trigger(s)", triggers.len());
    Ok(())
}
