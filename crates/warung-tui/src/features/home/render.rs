//! Home feature view: header, category tabs, and the product list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use warung_core::catalog::{self, Product};

use crate::common::text::truncate_with_ellipsis;
use crate::state::AppState;

pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header / search bar
            Constraint::Length(2), // category tabs
            Constraint::Min(1),    // product list
            Constraint::Length(1), // hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_categories(frame, app, chunks[1]);
    render_products(frame, app, chunks[2]);
    render_hints(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &AppState, area: Rect) {
    let home = &app.home;
    let line = if home.search_active {
        Line::from(vec![
            Span::styled(" Cari: ", Style::default().fg(Color::Cyan)),
            Span::raw(home.query.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ])
    } else {
        let who = if app.auth.state.email.is_empty() {
            String::new()
        } else {
            format!(" — {}", app.auth.state.email)
        };
        Line::from(vec![
            Span::styled(
                " Warung",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(who, Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_categories(frame: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, category) in catalog::categories().iter().enumerate() {
        let style = if i == app.home.category_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", category.name), style));
        spans.push(Span::raw(" "));
    }
    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_products(frame: &mut Frame, app: &AppState, area: Rect) {
    let products = app.home.visible_products();

    if products.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " Tidak ada produk yang cocok.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(34).max(12);
    let lines: Vec<Line<'static>> = products
        .iter()
        .enumerate()
        .take(area.height as usize)
        .map(|(i, product)| product_line(product, i == app.home.selected, name_width))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn product_line(product: &Product, selected: bool, name_width: usize) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let name = truncate_with_ellipsis(product.name, name_width);
    let text = format!(
        "{marker}{name:<name_width$}  {:>10}  ★{:.1}  {} terjual",
        catalog::format_price(product.price),
        product.rating,
        product.sold,
    );
    let style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(text, style))
}

fn render_hints(frame: &mut Frame, app: &AppState, area: Rect) {
    let hints = if app.tasks.logout.is_running() {
        " keluar akun...".to_string()
    } else if app.home.search_active {
        " ketik untuk mencari · ↑↓ pilih · Enter detail · Esc tutup cari".to_string()
    } else {
        " / cari · ←→ kategori · ↑↓ pilih · Enter detail · Ctrl+L keluar akun · Esc keluar"
            .to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
