use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the text-entry row
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match app.mode {
        Mode::Navigate => {
            if app.widget.entry().is_empty() {
                Line::from(Span::styled(
                    " i to add",
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                // Unsubmitted draft stays visible, dimmed
                Line::from(vec![
                    Span::styled(" > ", Style::default().fg(app.theme.dim).bg(bg)),
                    Span::styled(
                        app.widget.entry().to_string(),
                        Style::default().fg(app.theme.dim).bg(bg),
                    ),
                ])
            }
        }
        Mode::Insert => {
            let entry = app.widget.entry();
            let cursor = app.entry_cursor.min(entry.len());
            let before = &entry[..cursor];
            // The caret sits on the grapheme at the cursor, or on a
            // trailing space cell at the end of the line
            let (at, after) = match unicode::next_grapheme_boundary(entry, cursor) {
                Some(end) => (&entry[cursor..end], &entry[end..]),
                None => (" ", ""),
            };

            let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
            let caret_style = Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight);

            Line::from(vec![
                Span::styled(" > ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(before.to_string(), text_style),
                Span::styled(at.to_string(), caret_style),
                Span::styled(after.to_string(), text_style),
            ])
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
