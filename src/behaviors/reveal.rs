use log::debug;
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;
use crate::watch::{self, WatchMode, WatchOptions};

/// Sections start hidden and are revealed one time each.
pub struct SectionReveal<E> {
    sections: Vec<E>,
    hidden_class: String,
    revealed: Vec<bool>,
}

impl<E: Surface> SectionReveal<E> {
    pub fn new(sections: Vec<E>, hidden_class: &str) -> Self {
        for section in &sections {
            section.add_class(hidden_class);
        }
        let revealed = vec![false; sections.len()];
        Self {
            sections,
            hidden_class: hidden_class.to_string(),
            revealed,
        }
    }

    /// Returns true only for the call that actually revealed the section.
    pub fn reveal(&mut self, index: usize) -> bool {
        match (self.sections.get(index), self.revealed.get_mut(index)) {
            (Some(section), Some(done)) if !*done => {
                section.remove_class(&self.hidden_class);
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let sections = dom::query_all(document, &config.selectors.sections)?;
    let mut reveal = SectionReveal::new(sections.clone(), &config.classes.section_hidden);

    let options = WatchOptions {
        root_margin: "0px".to_string(),
        threshold: config.reveal_threshold,
        mode: WatchMode::Once,
    };

    debug!("Watching {} section(s) for reveal", sections.len());
    watch::watch(sections, &options, move |index, _, _| {
        if reveal.reveal(index) {
            debug!("Revealed section {} ({} pending)", index, reveal.pending());
        }
    })
}
