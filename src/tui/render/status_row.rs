use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Widget};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match &app.widget {
        // The share link always reflects the current list
        Widget::Rich(page) => format!(" {}", page.location.href()),
        Widget::Plain(_) => String::new(),
    };

    let hint = if app.show_key_hints {
        match app.mode {
            Mode::Navigate => "i add  space done  d del  s/S sort  D clear  y share  ? help ",
            Mode::Insert => "Enter add  Esc done ",
        }
    } else {
        ""
    };

    let hint_width = unicode::display_width(hint);
    let left_budget = width.saturating_sub(hint_width + 1);
    let left = unicode::truncate_to_width(&left, left_budget);
    let left_width = unicode::display_width(&left);

    let mut spans = vec![Span::styled(
        left,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if left_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
