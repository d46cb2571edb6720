use log::{debug, warn};
use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::Result;

const EXTRA_HEIGHT_PX: f64 = 30.0;

/// Computed `height` grown by a fixed amount, e.g. `"40px"` -> `"70px"`.
pub fn padded_height(computed: &str, extra: f64) -> Option<String> {
    let px: f64 = computed.trim().strip_suffix("px")?.parse().ok()?;
    Some(format!("{}px", px + extra))
}

fn build_message(document: &Document, config: &PageConfig) -> Result<Element> {
    let message = document.create_element("div")?;
    message.add_class(&config.classes.cookie_message);
    message.set_text_content(Some(&config.cookie_text));

    let button = document.create_element("button")?;
    button.set_class_name(&format!("btn {}", config.classes.cookie_close));
    button.set_text_content(Some("Got it!"));
    message.append_child(&button)?;

    for (property, value) in [
        ("background-color", "#37383d"),
        ("width", "100%"),
        ("position", "fixed"),
        ("bottom", "0"),
        ("z-index", "10000"),
    ] {
        message.set_style(property, value);
    }
    Ok(message)
}

/// Appends a dismissible cookie message to the header.
pub fn install(window: &Window, document: &Document, config: &PageConfig) -> Result<()> {
    if !config.cookie_notice {
        return Ok(());
    }
    let header = dom::query(document, &config.selectors.header)?;
    let message = build_message(document, config)?;
    header.append_child(&message)?;

    // Height is only known once the message is laid out.
    match window
        .get_computed_style(&message)?
        .map(|style| style.get_property_value("height"))
    {
        Some(Ok(height)) => match padded_height(&height, EXTRA_HEIGHT_PX) {
            Some(padded) => message.set_style("height", &padded),
            None => debug!("Cookie message height not in px: {}", height),
        },
        _ => warn!("Could not read cookie message height"),
    }

    let close_selector = format!(".{}", config.classes.cookie_close);
    let close = dom::query_all_within(&message, &close_selector)?
        .into_iter()
        .next();
    if let Some(close) = close {
        let target = message.clone();
        dom::listen(&close, "click", move |_| {
            target.remove();
            debug!("Cookie message dismissed");
        })?;
    }
    Ok(())
}
