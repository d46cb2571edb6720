use web_sys::Window;

use crate::dom;
use crate::error::Result;

/// Reloads always start from the top of the page.
pub fn install(window: &Window) -> Result<()> {
    let target = window.clone();
    dom::listen(window, "beforeunload", move |_| {
        target.scroll_to_with_x_and_y(0.0, 0.0);
    })
}
