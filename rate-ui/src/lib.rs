pub mod app;
pub mod components;
pub mod export;
pub mod gui;
pub mod logging;

use gpui::{App, actions};
pub use gui::setup_app;
use tracing::info;

actions!(rate_card, [Quit]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
