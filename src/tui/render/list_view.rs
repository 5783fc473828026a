use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Widget};
use crate::util::unicode;

/// Render the list area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.widget.is_empty() {
        let hint = match app.mode {
            Mode::Insert => " Nothing yet \u{2014} type and press Enter",
            Mode::Navigate => " List is empty \u{2014} press i to add",
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;

    // Keep the cursor row on screen
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll + visible_height {
        app.scroll = app.cursor + 1 - visible_height;
    }

    let mut lines: Vec<Line> = Vec::new();
    match &app.widget {
        Widget::Rich(page) => {
            for (i, item) in page.list.items.iter().enumerate() {
                lines.push(item_line(app, area, i, &item.text, Some(item.done)));
            }
        }
        Widget::Plain(page) => {
            for (i, text) in page.list.items.iter().enumerate() {
                lines.push(item_line(app, area, i, text, None));
            }
        }
    }

    let lines: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One list row: checkbox marker (rich only), text, cursor highlight.
fn item_line<'a>(app: &App, area: Rect, index: usize, text: &str, done: Option<bool>) -> Line<'a> {
    let is_cursor = index == app.cursor && app.mode == Mode::Navigate;
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span> = Vec::new();

    let marker = match done {
        Some(true) => " [x] ",
        Some(false) => " [ ] ",
        None => "  -  ",
    };
    let marker_style = if done == Some(true) {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    spans.push(Span::styled(marker.to_string(), marker_style));

    let mut text_style = if is_cursor {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    if done == Some(true) {
        text_style = Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    let width = (area.width as usize).saturating_sub(marker.len());
    spans.push(Span::styled(
        unicode::truncate_to_width(text, width),
        text_style,
    ));

    // Pad the cursor row to the full width
    if is_cursor {
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let w = area.width as usize;
        if content_width < w {
            spans.push(Span::styled(
                " ".repeat(w - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
