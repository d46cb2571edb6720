use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;
use crate::watch::{self, WatchMode, WatchOptions};

pub const DEFERRED_SOURCE: &str = "data-src";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Placeholder,
    Loading,
    Loaded,
}

pub struct LazyImage<E> {
    image: E,
    blur_class: String,
    phase: Phase,
}

impl<E: Surface> LazyImage<E> {
    pub fn new(image: E, blur_class: &str) -> Self {
        Self {
            image,
            blur_class: blur_class.to_string(),
            phase: Phase::Placeholder,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Swaps in the real source. Returns true if a fetch was started.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Placeholder {
            return false;
        }
        let Some(source) = self.image.attribute(DEFERRED_SOURCE) else {
            return false;
        };
        self.image.set_attribute("src", &source);
        self.phase = Phase::Loading;
        true
    }

    /// Called on the image's `load` event; the blur only goes once bytes are in.
    pub fn finish(&mut self) {
        if self.phase == Phase::Loading {
            self.image.remove_class(&self.blur_class);
            self.phase = Phase::Loaded;
        }
    }
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let elements = dom::query_all(document, &config.selectors.lazy_images)?;
    let images: Rc<RefCell<Vec<LazyImage<_>>>> = Rc::new(RefCell::new(
        elements
            .iter()
            .cloned()
            .map(|el| LazyImage::new(el, &config.classes.lazy_image))
            .collect(),
    ));

    let options = WatchOptions {
        root_margin: config.lazy_margin.clone(),
        threshold: 0.0,
        mode: if config.lazy_one_shot {
            WatchMode::Once
        } else {
            WatchMode::Persistent
        },
    };

    debug!("Watching {} lazy image(s)", elements.len());
    watch::watch(elements, &options, move |index, element, intersecting| {
        if !intersecting {
            return;
        }
        let started = images
            .borrow_mut()
            .get_mut(index)
            .map(LazyImage::begin)
            .unwrap_or(false);
        if !started {
            return;
        }

        let images = images.clone();
        let result = dom::listen_once(element, "load", move || {
            if let Some(image) = images.borrow_mut().get_mut(index) {
                image.finish();
                debug!("Lazy image {} loaded", index);
            }
        });
        if let Err(e) = result {
            warn!("Could not wait for lazy image {}: {}", index, e);
        }
    })
}
