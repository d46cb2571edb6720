use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub reveal_threshold: f64,
    pub lazy_margin: String,
    pub lazy_one_shot: bool,
    pub hover_opacity: f64,
    pub rest_opacity: f64,
    pub cookie_notice: bool,
    pub cookie_text: String,
}

/// Where each behavior finds its elements.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub nav_links: String,
    pub nav_link: String,
    pub header: String,
    pub modal: String,
    pub overlay: String,
    pub close_modal: String,
    pub open_modal: String,
    pub scroll_button: String,
    pub scroll_target: String,
    pub sections: String,
    pub lazy_images: String,
    pub tab_container: String,
    pub tab: String,
    pub tab_content: String,
    pub slides: String,
    pub slider_right: String,
    pub slider_left: String,
    pub dots: String,
}

/// Presentation markers handed to the stylesheet.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Classes {
    pub hidden: String,
    pub sticky: String,
    pub nav_link: String,
    pub section_hidden: String,
    pub lazy_image: String,
    pub tab: String,
    pub tab_active: String,
    pub content: String,
    pub content_active: String,
    pub dot: String,
    pub dot_active: String,
    pub cookie_message: String,
    pub cookie_close: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            reveal_threshold: 0.15,
            lazy_margin: "200px".to_string(),
            lazy_one_shot: true,
            hover_opacity: 0.5,
            rest_opacity: 1.0,
            cookie_notice: false,
            cookie_text: "We use cookies to improve functionality and analytics.".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".nav".to_string(),
            nav_links: ".nav__links".to_string(),
            nav_link: ".nav__link".to_string(),
            header: ".header".to_string(),
            modal: ".modal".to_string(),
            overlay: ".overlay".to_string(),
            close_modal: ".btn--close-modal".to_string(),
            open_modal: ".btn--show-modal".to_string(),
            scroll_button: ".btn--scroll-to".to_string(),
            scroll_target: "#section--1".to_string(),
            sections: ".section".to_string(),
            lazy_images: "img[data-src]".to_string(),
            tab_container: ".operations__tab-container".to_string(),
            tab: ".operations__tab".to_string(),
            tab_content: ".operations__content".to_string(),
            slides: ".slide".to_string(),
            slider_right: ".slider__btn--right".to_string(),
            slider_left: ".slider__btn--left".to_string(),
            dots: ".dots".to_string(),
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            hidden: "hidden".to_string(),
            sticky: "sticky".to_string(),
            nav_link: "nav__link".to_string(),
            section_hidden: "section--hidden".to_string(),
            lazy_image: "lazy-img".to_string(),
            tab: "operations__tab".to_string(),
            tab_active: "operations__tab--active".to_string(),
            content: "operations__content".to_string(),
            content_active: "operations__content--active".to_string(),
            dot: "dots__dot".to_string(),
            dot_active: "dots__dot--active".to_string(),
            cookie_message: "cookie-message".to_string(),
            cookie_close: "btn--close-cookie".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the document, falling back to defaults when the
    /// block is absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring page config: {}", e);
                Self::default()
            }
        }
    }

    /// Content pane class for a tab key, e.g. `operations__content--2`.
    pub fn content_class_for(&self, key: &str) -> String {
        format!("{}--{}", self.classes.content, key)
    }
}
