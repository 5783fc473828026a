use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Widget};

/// Render the title row and its separator line
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let counts = match &app.widget {
        Widget::Rich(page) => {
            let done = page.list.done_count();
            if done > 0 {
                format!("{} items, {} done", page.list.len(), done)
            } else {
                format!("{} items", page.list.len())
            }
        }
        Widget::Plain(page) => format!("{} items (plain)", page.list.len()),
    };

    let title = Line::from(vec![
        Span::styled(
            " [*] lyst ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)),
    ]);

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![title, separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
