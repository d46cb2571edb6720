pub mod carousel;
pub mod cookie_notice;
pub mod lazy_images;
pub mod modal;
pub mod navigation;
pub mod reveal;
pub mod scroll_reset;
pub mod sticky;
pub mod tabs;

use log::{error, info};

use crate::config::PageConfig;
use crate::error::{BehaviorError, Result};

/// Wires every behavior to the current document. Each one stands alone:
/// a behavior whose elements are missing is logged and skipped.
pub fn install_all() -> Result<()> {
    let window = web_sys::window()
        .ok_or_else(|| BehaviorError::Js("no window available".to_string()))?;
    let document = crate::dom::document()?;
    let config = PageConfig::from_document(&document);

    let results = [
        ("scroll reset", scroll_reset::install(&window)),
        ("modal", modal::install(&document, &config)),
        ("scroll button", navigation::install_scroll_button(&document, &config)),
        ("nav links", navigation::install_delegated_links(&document, &config)),
        ("nav hover", navigation::install_hover_fade(&document, &config)),
        ("sticky nav", sticky::install(&document, &config)),
        ("section reveal", reveal::install(&document, &config)),
        ("lazy images", lazy_images::install(&document, &config)),
        ("tabs", tabs::install(&document, &config)),
        ("carousel", carousel::install(&document, &config)),
        ("cookie notice", cookie_notice::install(&window, &document, &config)),
    ];

    let mut installed = 0;
    for (name, result) in results {
        match result {
            Ok(()) => installed += 1,
            Err(e) => error!("Skipping {}: {}", name, e),
        }
    }
    info!("Installed {} page behavior(s)", installed);
    Ok(())
}
