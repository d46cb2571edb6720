use log::debug;
use web_sys::{Document, Element, Event};

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;

/// In-page anchor selector for a link's href, if it points inside the page.
pub fn section_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// The href of a clicked element, provided it is a nav link.
pub fn link_href<E: Surface>(el: &E, link_class: &str) -> Option<String> {
    if !el.has_class(link_class) {
        return None;
    }
    el.attribute("href")
}

/// Fades the siblings of `target` when it is one of `links`. Returns
/// false for anything else hovered inside the nav.
pub fn fade_from<E: Surface + PartialEq>(
    target: &E,
    links: &[E],
    link_class: &str,
    opacity: f64,
) -> bool {
    if !target.has_class(link_class) {
        return false;
    }
    match links.iter().position(|el| el == target) {
        Some(hovered) => {
            fade_siblings(links, hovered, opacity);
            true
        }
        None => false,
    }
}

/// Sets the opacity of every link but the hovered one.
pub fn fade_siblings<E: Surface>(links: &[E], hovered: usize, opacity: f64) {
    let value = opacity.to_string();
    for (i, link) in links.iter().enumerate() {
        if i != hovered {
            link.set_style("opacity", &value);
        }
    }
}

/// Builds a `mouseover`/`mouseout` handler that fades sibling nav links to `opacity`.
pub fn make_hover_handler(config: &PageConfig, opacity: f64) -> impl FnMut(Event) + 'static {
    let nav_selector = config.selectors.nav.clone();
    let link_selector = config.selectors.nav_link.clone();
    let link_class = config.classes.nav_link.clone();

    move |e: Event| {
        let Some(target) = dom::event_element(&e) else {
            return;
        };
        let Ok(Some(group)) = target.closest(&nav_selector) else {
            return;
        };
        let Ok(links) = dom::query_all_within(&group, &link_selector) else {
            return;
        };
        fade_from(&target, &links, &link_class, opacity);
    }
}

/// "Learn more" button scrolling to the first section.
pub fn install_scroll_button(document: &Document, config: &PageConfig) -> Result<()> {
    let button = dom::query(document, &config.selectors.scroll_button)?;
    let target = dom::query(document, &config.selectors.scroll_target)?;

    dom::listen(&button, "click", move |_| {
        dom::smooth_scroll_to(&target);
    })
}

/// One listener on the links container routes clicks to their sections.
pub fn install_delegated_links(document: &Document, config: &PageConfig) -> Result<()> {
    let container = dom::query(document, &config.selectors.nav_links)?;
    let link_class = config.classes.nav_link.clone();
    let document = document.clone();

    dom::listen(&container, "click", move |e| {
        e.prevent_default();

        let Some(href) = dom::event_element(&e).and_then(|el| link_href(&el, &link_class))
        else {
            return;
        };
        match section_target(&href).and_then(|id| find(&document, id)) {
            Some(section) => {
                debug!("Scrolling to {}", href);
                dom::smooth_scroll_to(&section);
            }
            None => debug!("Ignoring nav link to {}", href),
        }
    })
}

pub fn install_hover_fade(document: &Document, config: &PageConfig) -> Result<()> {
    let nav = dom::query(document, &config.selectors.nav)?;

    dom::listen(&nav, "mouseover", make_hover_handler(config, config.hover_opacity))?;
    dom::listen(&nav, "mouseout", make_hover_handler(config, config.rest_opacity))
}

fn find(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    #[test]
    fn only_in_page_anchors_are_followed() {
        assert_eq!(section_target("#section--2"), Some("#section--2"));
        assert_eq!(section_target("  #section--3 "), Some("#section--3"));
        assert_eq!(section_target("#"), None);
        assert_eq!(section_target(""), None);
        assert_eq!(section_target("https://example.com/#x"), None);
    }

    #[test]
    fn hover_dims_every_other_link() {
        let links: Vec<FakeElement> = (0..3)
            .map(|_| FakeElement::with_classes(&["nav__link"]))
            .collect();

        fade_siblings(&links, 1, 0.5);

        assert_eq!(links[0].style("opacity").as_deref(), Some("0.5"));
        assert_eq!(links[1].style("opacity"), None);
        assert_eq!(links[2].style("opacity").as_deref(), Some("0.5"));
    }

    #[test]
    fn clicks_on_non_links_yield_no_target() {
        let link = FakeElement::with_classes(&["nav__link"]).with_attribute("href", "#section--1");
        let item = FakeElement::with_classes(&["nav__item"]).with_attribute("href", "#section--2");
        let bare = FakeElement::with_classes(&["nav__link"]);

        assert_eq!(link_href(&link, "nav__link").as_deref(), Some("#section--1"));
        assert_eq!(link_href(&item, "nav__link"), None);
        assert_eq!(link_href(&bare, "nav__link"), None);
    }

    #[test]
    fn hovering_a_non_link_changes_nothing() {
        let links: Vec<FakeElement> = (0..3)
            .map(|_| FakeElement::with_classes(&["nav__link"]))
            .collect();
        let logo = FakeElement::with_classes(&["nav__logo"]);

        assert!(!fade_from(&logo, &links, "nav__link", 0.5));
        assert!(links.iter().all(|l| l.style("opacity").is_none()));

        // A link from another nav group is not one of ours either.
        let stranger = FakeElement::with_classes(&["nav__link"]);
        assert!(!fade_from(&stranger, &links, "nav__link", 0.5));
        assert!(links.iter().all(|l| l.style("opacity").is_none()));

        assert!(fade_from(&links[2], &links, "nav__link", 0.5));
        assert_eq!(links[0].style("opacity").as_deref(), Some("0.5"));
        assert_eq!(links[2].style("opacity"), None);
    }

    #[test]
    fn leaving_restores_full_opacity() {
        let links: Vec<FakeElement> = (0..3)
            .map(|_| FakeElement::with_classes(&["nav__link"]))
            .collect();

        fade_siblings(&links, 0, 0.5);
        fade_siblings(&links, 0, 1.0);

        assert_eq!(links[1].style("opacity").as_deref(), Some("1"));
        assert_eq!(links[2].style("opacity").as_deref(), Some("1"));
    }
}
