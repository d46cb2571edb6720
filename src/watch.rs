//! Watch-until-visible: a small wrapper over `IntersectionObserver`.
//!
//! Section reveal and lazy images settle each element once and then stop
//! observing it; the sticky header keeps its subscription for the life of
//! the page. Both are expressed through [`WatchMode`].

use std::collections::HashSet;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchMode {
    /// Settle on the first intersecting entry, then unobserve.
    Once,
    /// Deliver every entry, entering and leaving, forever.
    Persistent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    pub root_margin: String,
    pub threshold: f64,
    pub mode: WatchMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Skip,
    Deliver { release: bool },
}

/// Decides which observer entries reach the callback.
#[derive(Debug)]
pub struct WatchLog {
    mode: WatchMode,
    settled: HashSet<usize>,
}

impl WatchLog {
    pub fn new(mode: WatchMode) -> Self {
        Self {
            mode,
            settled: HashSet::new(),
        }
    }

    pub fn admit(&mut self, index: usize, intersecting: bool) -> Admission {
        match self.mode {
            WatchMode::Persistent => Admission::Deliver { release: false },
            WatchMode::Once => {
                // Entries queued before unobserve took effect can still arrive.
                if !intersecting || self.settled.contains(&index) {
                    return Admission::Skip;
                }
                self.settled.insert(index);
                Admission::Deliver { release: true }
            }
        }
    }

    #[cfg(test)]
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.contains(&index)
    }
}

/// Observes `elements` and calls `on_change(index, element, intersecting)`
/// for every admitted entry. The observer lives as long as it has targets.
pub fn watch<F>(elements: Vec<Element>, options: &WatchOptions, mut on_change: F) -> Result<()>
where
    F: FnMut(usize, &Element, bool) + 'static,
{
    let mut log = WatchLog::new(options.mode);
    let watched = elements.clone();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };

                match log.admit(index, entry.is_intersecting()) {
                    Admission::Skip => {}
                    Admission::Deliver { release } => {
                        on_change(index, &target, entry.is_intersecting());
                        if release {
                            observer.unobserve(&target);
                            debug!("Stopped watching element {}", index);
                        }
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_ignores_exits_and_repeats() {
        let mut log = WatchLog::new(WatchMode::Once);

        assert_eq!(log.admit(0, false), Admission::Skip);
        assert!(!log.is_settled(0));

        assert_eq!(log.admit(0, true), Admission::Deliver { release: true });
        assert!(log.is_settled(0));

        assert_eq!(log.admit(0, true), Admission::Skip);
        assert_eq!(log.admit(0, false), Admission::Skip);
    }

    #[test]
    fn once_tracks_elements_independently() {
        let mut log = WatchLog::new(WatchMode::Once);

        assert_eq!(log.admit(1, true), Admission::Deliver { release: true });
        assert_eq!(log.admit(2, true), Admission::Deliver { release: true });
        assert_eq!(log.admit(1, true), Admission::Skip);
        assert!(!log.is_settled(0));
    }

    #[test]
    fn persistent_delivers_everything() {
        let mut log = WatchLog::new(WatchMode::Persistent);

        for intersecting in [true, false, true, false] {
            assert_eq!(
                log.admit(0, intersecting),
                Admission::Deliver { release: false }
            );
        }
        assert!(!log.is_settled(0));
    }
}
