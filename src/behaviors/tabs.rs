use log::{debug, warn};
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;

pub const TAB_KEY: &str = "data-tab";

/// Tabs and their panes; a pane belongs to the tab whose `data-tab` key
/// appears in its `<content>--<key>` class.
pub struct Tabs<E> {
    tabs: Vec<E>,
    panes: Vec<E>,
    config: PageConfig,
}

impl<E: Surface> Tabs<E> {
    pub fn new(tabs: Vec<E>, panes: Vec<E>, config: &PageConfig) -> Self {
        Self {
            tabs,
            panes,
            config: config.clone(),
        }
    }

    /// Activates tab `index` and its pane. Returns the key that was selected.
    pub fn select(&self, index: usize) -> Option<String> {
        let tab = self.tabs.get(index)?;
        let key = tab.attribute(TAB_KEY)?;
        let pane_class = self.config.content_class_for(&key);
        let Some(pane) = self.panes.iter().find(|p| p.has_class(&pane_class)) else {
            warn!("Tab {} has no matching content pane", key);
            return None;
        };

        let classes = &self.config.classes;
        for t in &self.tabs {
            t.remove_class(&classes.tab_active);
        }
        for p in &self.panes {
            p.remove_class(&classes.content_active);
        }

        tab.add_class(&classes.tab_active);
        pane.add_class(&classes.content_active);
        Some(key)
    }

    pub fn position(&self, tab: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.tabs.iter().position(|t| t == tab)
    }

    /// Handles a click on `target` anywhere in the strip. Clicking the
    /// number inside a tab still resolves to the tab; empty space does nothing.
    pub fn click(&self, target: E) -> Option<String>
    where
        E: PartialEq,
    {
        let clicked = dom::closest_with_class(target, &self.config.classes.tab)?;
        self.position(&clicked).and_then(|i| self.select(i))
    }
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let container = dom::query(document, &config.selectors.tab_container)?;
    let tabs = dom::query_all(document, &config.selectors.tab)?;
    let panes = dom::query_all(document, &config.selectors.tab_content)?;
    let tabs = Tabs::new(tabs, panes, config);

    dom::listen(&container, "click", move |e| {
        if let Some(key) = dom::event_element(&e).and_then(|el| tabs.click(el)) {
            debug!("Selected tab {}", key);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    fn operations() -> (Tabs<FakeElement>, Vec<FakeElement>, Vec<FakeElement>) {
        let config = PageConfig::default();
        let tabs: Vec<FakeElement> = (1..=3)
            .map(|k| {
                FakeElement::with_classes(&["operations__tab"]).with_attribute(TAB_KEY, &k.to_string())
            })
            .collect();
        let panes: Vec<FakeElement> = (1..=3)
            .map(|k| {
                let class = config.content_class_for(&k.to_string());
                FakeElement::with_classes(&["operations__content", class.as_str()])
            })
            .collect();
        tabs[0].add_class("operations__tab--active");
        panes[0].add_class("operations__content--active");

        (Tabs::new(tabs.clone(), panes.clone(), &config), tabs, panes)
    }

    fn active(els: &[FakeElement], class: &str) -> Vec<usize> {
        els.iter()
            .enumerate()
            .filter(|(_, el)| el.has_class(class))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn clicking_tab_two_shows_pane_two() {
        let (switcher, tabs, panes) = operations();

        assert_eq!(switcher.select(1).as_deref(), Some("2"));

        assert_eq!(active(&tabs, "operations__tab--active"), vec![1]);
        assert_eq!(active(&panes, "operations__content--active"), vec![1]);
    }

    #[test]
    fn at_most_one_active_pair_after_any_click() {
        let (switcher, tabs, panes) = operations();

        for index in [2, 0, 2, 1, 5, 1] {
            switcher.select(index);
            let active_tabs = active(&tabs, "operations__tab--active");
            let active_panes = active(&panes, "operations__content--active");
            assert!(active_tabs.len() <= 1);
            assert_eq!(active_tabs, active_panes);
        }
    }

    #[test]
    fn tab_without_pane_changes_nothing() {
        let (switcher, tabs, panes) = operations();
        tabs[2].set_attribute(TAB_KEY, "9");

        assert_eq!(switcher.select(2), None);
        assert_eq!(active(&tabs, "operations__tab--active"), vec![0]);
        assert_eq!(active(&panes, "operations__content--active"), vec![0]);
    }

    #[test]
    fn click_on_tab_number_selects_its_tab() {
        let (switcher, tabs, panes) = operations();
        let number = FakeElement::default().with_parent(&tabs[2]);

        assert_eq!(switcher.click(number).as_deref(), Some("3"));
        assert_eq!(active(&tabs, "operations__tab--active"), vec![2]);
        assert_eq!(active(&panes, "operations__content--active"), vec![2]);
    }

    #[test]
    fn click_on_empty_strip_is_ignored() {
        let (switcher, tabs, panes) = operations();
        let strip = FakeElement::with_classes(&["operations__tab-container"]);
        let gap = FakeElement::default().with_parent(&strip);

        assert_eq!(switcher.click(strip), None);
        assert_eq!(switcher.click(gap), None);
        assert_eq!(active(&tabs, "operations__tab--active"), vec![0]);
        assert_eq!(active(&panes, "operations__content--active"), vec![0]);
    }

    #[test]
    fn finds_clicked_tab_by_identity() {
        let (switcher, tabs, _) = operations();

        assert_eq!(switcher.position(&tabs[2]), Some(2));
        assert_eq!(switcher.position(&FakeElement::default()), None);
    }
}
