//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::features::{auth, detail, home, splash};
use crate::state::{AppState, Screen};

/// Spinner frames for the loading indicator.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the active screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    match app.screen {
        Screen::Splash => splash::render(frame, app),
        Screen::Login => auth::render::render_login(frame, app),
        Screen::Register => auth::render::render_register(frame, app),
        Screen::Home => home::render::render(frame, app),
        Screen::Detail => detail::render::render(frame, app),
    }
}

/// Centers a `width` x `height` box within `area`, clamping to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
