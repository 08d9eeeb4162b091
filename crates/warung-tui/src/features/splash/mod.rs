//! Splash feature: branded pane shown for a fixed dwell on startup.
//!
//! The splash hands over to Home when a session was restored from the
//! preference store, otherwise to Login. Any key skips the dwell.

mod state;

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
pub use state::SplashState;

use crate::render::centered_rect;
use crate::state::AppState;

pub fn render(frame: &mut Frame, app: &AppState) {
    let popup = centered_rect(frame.area(), 40, 5);
    let spinner = crate::render::SPINNER_FRAMES
        [app.spinner_frame % crate::render::SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(Span::styled(
            "W A R U N G",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Jajanan kampus, diantar cepat",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} memuat..."),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines), popup);
}
