//! Auth feature views.
//!
//! Renders the login and register forms as a centered pane: labeled fields
//! with their error lines, the role selector, the remember-me checkbox, and
//! the submit button.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use warung_core::auth::Role;

use super::state::{AuthFocus, AuthFormState};
use crate::render::{SPINNER_FRAMES, centered_rect};
use crate::state::AppState;

const FORM_WIDTH: u16 = 52;

pub fn render_login(frame: &mut Frame, app: &AppState) {
    render_form(frame, app, false);
}

pub fn render_register(frame: &mut Frame, app: &AppState) {
    render_form(frame, app, true);
}

fn render_form(frame: &mut Frame, app: &AppState, register: bool) {
    let form = &app.auth;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.extend(field_lines(
        "Email",
        form.state.email.clone(),
        form.focus == AuthFocus::Email,
        form.state.email_error.as_deref(),
    ));
    lines.extend(field_lines(
        "Password",
        password_display(&form.state.password, form.state.password_visible),
        form.focus == AuthFocus::Password,
        form.state.password_error.as_deref(),
    ));
    if register {
        lines.extend(field_lines(
            "Konfirmasi password",
            password_display(&form.state.confirm_password, form.state.password_visible),
            form.focus == AuthFocus::ConfirmPassword,
            form.state.confirm_password_error.as_deref(),
        ));
    }

    lines.push(role_line(form));
    if !register {
        lines.push(remember_line(form));
    }
    lines.push(Line::from(""));
    lines.push(submit_line(app, register));
    lines.push(switch_line(form, register));
    lines.push(Line::from(""));
    lines.push(hint_line(register));

    let title = if register {
        " Daftar — Warung "
    } else {
        " Masuk — Warung "
    };
    let height = (lines.len() as u16).saturating_add(2);
    let popup = centered_rect(frame.area(), FORM_WIDTH, height);

    let para = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    );
    frame.render_widget(para, popup);
}

fn password_display(password: &str, visible: bool) -> String {
    if visible {
        password.to_string()
    } else {
        "•".repeat(password.chars().count())
    }
}

fn field_lines(
    label: &'static str,
    value: String,
    focused: bool,
    error: Option<&str>,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let marker = if focused { "> " } else { "  " };
    let mut value_spans = vec![Span::raw(marker), Span::raw(value)];
    if focused {
        value_spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![
        Line::from(Span::styled(format!(" {label}"), label_style)),
        Line::from(value_spans),
    ];
    if let Some(msg) = error {
        lines.push(Line::from(Span::styled(
            format!("   {msg}"),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn role_line(form: &AuthFormState) -> Line<'static> {
    let focused = form.focus == AuthFocus::Role;
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let pick = |role: Role| {
        if form.state.role == role {
            format!("◉ {}", role.display_name())
        } else {
            format!("○ {}", role.display_name())
        }
    };
    Line::from(Span::styled(
        format!(
            " {}Sebagai   {}   {}",
            if focused { "> " } else { "  " },
            pick(Role::Buyer),
            pick(Role::Seller)
        ),
        style,
    ))
}

fn remember_line(form: &AuthFormState) -> Line<'static> {
    let focused = form.focus == AuthFocus::RememberMe;
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mark = if form.state.remember_me { "x" } else { " " };
    Line::from(Span::styled(
        format!(
            " {}[{mark}] Ingat saya",
            if focused { "> " } else { "  " }
        ),
        style,
    ))
}

fn submit_line(app: &AppState, register: bool) -> Line<'static> {
    let form = &app.auth;
    let focused = form.focus == AuthFocus::Submit;
    let label = if register { "Daftar" } else { "Masuk" };

    if form.state.is_loading {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        return Line::from(Span::styled(
            format!("   {spinner} Memproses..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(vec![
        Span::raw("   "),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

fn switch_line(form: &AuthFormState, register: bool) -> Line<'static> {
    let focused = form.focus == AuthFocus::SwitchScreen;
    let text = if register {
        "Sudah punya akun? Masuk"
    } else {
        "Belum punya akun? Daftar"
    };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(format!("   {text}"), style))
}

fn hint_line(register: bool) -> Line<'static> {
    let esc = if register { "Esc kembali" } else { "Esc keluar" };
    Line::from(Span::styled(
        format!(" Tab pindah · Enter kirim · Ctrl+T password · {esc}"),
        Style::default().fg(Color::DarkGray),
    ))
}
