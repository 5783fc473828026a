use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;
use crate::view::controls::ControlKind;

use super::app::{App, Mode, Widget};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Share overlay intercepts all input
    if app.show_share {
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_share = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
            app.entry_cursor = app.widget.entry().len();
            app.mode = Mode::Insert;
        }

        KeyCode::Char('j') | KeyCode::Down => {
            if !app.widget.is_empty() {
                app.cursor = (app.cursor + 1).min(app.widget.len() - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => {
            app.cursor = app.widget.len().saturating_sub(1);
        }

        KeyCode::Char('d') => {
            if !app.widget.is_empty() {
                app.widget.delete_at(app.cursor);
                app.clamp_cursor();
            }
        }

        // Rich-widget commands; no-ops on the plain list
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            let cursor = app.cursor;
            if let Some(page) = app.page_mut() {
                page.click(ControlKind::Checkbox, Some(cursor));
            }
        }
        KeyCode::Char('s') => {
            if let Some(page) = app.page_mut() {
                page.click(ControlKind::SortAscendingButton, None);
            }
        }
        KeyCode::Char('S') => {
            if let Some(page) = app.page_mut() {
                page.click(ControlKind::SortDescendingButton, None);
            }
        }
        KeyCode::Char('D') => {
            if let Some(page) = app.page_mut() {
                page.click(ControlKind::RemoveDoneButton, None);
            }
            app.clamp_cursor();
        }
        KeyCode::Char('y') => {
            if matches!(app.widget, Widget::Rich(_)) {
                app.show_share = true;
            }
        }

        _ => {}
    }
}

fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.widget.submit_entry();
            app.entry_cursor = 0;
            app.cursor = app.widget.len().saturating_sub(1);
        }
        KeyCode::Backspace => {
            let entry = app.widget.entry_mut();
            if let Some(prev) = unicode::prev_grapheme_boundary(entry, app.entry_cursor) {
                entry.replace_range(prev..app.entry_cursor, "");
                app.entry_cursor = prev;
            }
        }
        KeyCode::Delete => {
            let entry = app.widget.entry_mut();
            if let Some(next) = unicode::next_grapheme_boundary(entry, app.entry_cursor) {
                entry.replace_range(app.entry_cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(app.widget.entry(), app.entry_cursor)
            {
                app.entry_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(app.widget.entry(), app.entry_cursor)
            {
                app.entry_cursor = next;
            }
        }
        KeyCode::Home => app.entry_cursor = 0,
        KeyCode::End => app.entry_cursor = app.widget.entry().len(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.widget.entry_mut().clear();
            app.entry_cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let cursor = app.entry_cursor;
            app.widget.entry_mut().insert(cursor, c);
            app.entry_cursor += c.len_utf8();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{Config, ShareConfig};
    use crate::view::page::Page;
    use crate::view::quick::QuickPage;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn rich_app() -> App {
        App::new(
            Widget::Rich(Page::new(ShareConfig::default())),
            &Config::default(),
        )
    }

    #[test]
    fn test_insert_and_submit() {
        let mut app = rich_app();
        handle_key(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.mode, Mode::Insert);
        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.widget.len(), 1);
        assert_eq!(app.widget.entry(), "");
        assert_eq!(app.entry_cursor, 0);
        // Still in insert mode for quick follow-up entries
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn test_backspace_is_grapheme_aware() {
        let mut app = rich_app();
        handle_key(&mut app, key(KeyCode::Char('i')));
        type_text(&mut app, "ok");
        app.widget.entry_mut().push_str("👍");
        app.entry_cursor = app.widget.entry().len();
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.widget.entry(), "ok");
    }

    #[test]
    fn test_toggle_and_delete_from_navigate() {
        let mut app = rich_app();
        handle_key(&mut app, key(KeyCode::Char('i')));
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.page().unwrap().list.items[0].done);

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(app.widget.is_empty());
    }

    #[test]
    fn test_sort_keys_are_noops_on_plain_list() {
        let mut app = App::new(Widget::Plain(QuickPage::new()), &Config::default());
        handle_key(&mut app, key(KeyCode::Char('i')));
        type_text(&mut app, "b");
        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));

        handle_key(&mut app, key(KeyCode::Char('s')));
        match &app.widget {
            Widget::Plain(page) => assert_eq!(page.list.items, vec!["b", "a"]),
            Widget::Rich(_) => unreachable!(),
        }
        // Share overlay never opens on the plain list
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(!app.show_share);
    }

    #[test]
    fn test_quit() {
        let mut app = rich_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
