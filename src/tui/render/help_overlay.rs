use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Widget};

const RICH_KEYS: &[(&str, &str)] = &[
    ("i / a / Enter", "add items"),
    ("j / k", "move"),
    ("space / x", "toggle done"),
    ("d", "delete item"),
    ("s / S", "sort A-Z / Z-A"),
    ("D", "delete all done"),
    ("y", "share link + QR"),
    ("q", "quit"),
];

const PLAIN_KEYS: &[(&str, &str)] = &[
    ("i / a / Enter", "add items"),
    ("j / k", "move"),
    ("d", "delete item"),
    ("q", "quit"),
];

/// Render the help popup
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.widget {
        Widget::Rich(_) => RICH_KEYS,
        Widget::Plain(_) => PLAIN_KEYS,
    };

    let popup = centered_rect(area, 44, keys.len() as u16 + 2);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let mut lines = Vec::new();
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<14}", key),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .style(Style::default().fg(app.theme.highlight).bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

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
