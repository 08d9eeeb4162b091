//! Product detail view.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use warung_core::catalog::{self, Product};

use crate::render::centered_rect;
use crate::state::AppState;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 14;

const FALLBACK_DESCRIPTION: &str =
    "Belum ada deskripsi untuk produk ini. Hubungi penjual untuk detail lebih lanjut.";

pub fn render(frame: &mut Frame, app: &AppState) {
    let Some(detail) = app.detail else {
        return;
    };
    let Some(product) = catalog::find_product(detail.product_id) else {
        return;
    };

    let popup = centered_rect(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let para = Paragraph::new(card_lines(product, detail.favorite))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Detail Produk "),
        );
    frame.render_widget(para, popup);
}

fn card_lines(product: &Product, favorite: bool) -> Vec<Line<'static>> {
    let heart = if favorite {
        Span::styled(" ♥", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ♡", Style::default().fg(Color::DarkGray))
    };

    let mut stats = format!(
        " ★{:.1}   {} min   {} terjual",
        product.rating, product.delivery_minutes, product.sold
    );
    if let Some(kcal) = product.calories {
        stats.push_str(&format!("   {kcal} kkal"));
    }

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", product.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            heart,
        ]),
        Line::from(Span::styled(
            format!(" {}", catalog::format_price(product.price)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(stats, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::raw(format!(
            " {}",
            product.description.unwrap_or(FALLBACK_DESCRIPTION)
        ))),
        Line::from(""),
        Line::from(Span::styled(
            " f favorit · Esc kembali",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
