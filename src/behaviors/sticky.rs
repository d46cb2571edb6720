use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;
use crate::watch::{self, WatchMode, WatchOptions};

pub struct StickyNav<E> {
    nav: E,
    class: String,
    stuck: bool,
}

impl<E: Surface> StickyNav<E> {
    pub fn new(nav: E, class: &str) -> Self {
        Self {
            nav,
            class: class.to_string(),
            stuck: false,
        }
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Pins the nav once the header has scrolled out from under it.
    pub fn header_visible(&mut self, visible: bool) {
        self.stuck = !visible;
        if self.stuck {
            self.nav.add_class(&self.class);
        } else {
            self.nav.remove_class(&self.class);
        }
    }
}

/// Negative margin so the switch happens as the nav starts to overlap the header.
pub fn header_margin(nav_height: f64) -> String {
    format!("-{}px", nav_height)
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let nav = dom::query(document, &config.selectors.nav)?;
    let header = dom::query(document, &config.selectors.header)?;
    let nav_height = nav.get_bounding_client_rect().height();

    let sticky = Rc::new(RefCell::new(StickyNav::new(nav, &config.classes.sticky)));
    let options = WatchOptions {
        root_margin: header_margin(nav_height),
        threshold: 0.0,
        mode: WatchMode::Persistent,
    };

    watch::watch(vec![header], &options, move |_, _, intersecting| {
        let mut sticky = sticky.borrow_mut();
        let was_stuck = sticky.is_stuck();
        sticky.header_visible(intersecting);
        if was_stuck != sticky.is_stuck() {
            debug!("Navigation sticky: {}", sticky.is_stuck());
        }
    })
}
