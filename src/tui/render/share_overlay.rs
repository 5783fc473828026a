use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

/// Render the share popup: the full link plus the QR image reference.
pub fn render_share_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.page() else {
        return;
    };

    let popup = centered_rect(area, 70, 12);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    let lines = vec![
        Line::from(Span::styled("Anyone opening this link gets the list:", label_style)),
        Line::from(Span::styled(page.location.href(), text_style)),
        Line::from(""),
        Line::from(Span::styled("QR image:", label_style)),
        Line::from(Span::styled(page.qr_src.clone(), text_style)),
        Line::from(""),
        Line::from(Span::styled("Esc to close", label_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" share ")
        .style(Style::default().fg(app.theme.highlight).bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

/// A centered rect of at most `width` x `height`, clamped to `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
