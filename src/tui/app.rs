use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::Config;
use crate::view::controls::ControlKind;
use crate::view::page::Page;
use crate::view::quick::QuickPage;

use super::input;
use super::render;
use super::theme::Theme;

/// Which widget variant this session runs
pub enum Widget {
    /// Items with completion flags, sorting, and a share link
    Rich(Page),
    /// Bare text entries, add and delete only
    Plain(QuickPage),
}

impl Widget {
    pub fn len(&self) -> usize {
        match self {
            Widget::Rich(page) => page.list.len(),
            Widget::Plain(page) => page.list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry(&self) -> &str {
        match self {
            Widget::Rich(page) => &page.entry,
            Widget::Plain(page) => &page.entry,
        }
    }

    pub fn entry_mut(&mut self) -> &mut String {
        match self {
            Widget::Rich(page) => &mut page.entry,
            Widget::Plain(page) => &mut page.entry,
        }
    }

    pub fn submit_entry(&mut self) {
        match self {
            Widget::Rich(page) => page.submit_entry(),
            Widget::Plain(page) => page.submit_entry(),
        }
    }

    pub fn delete_at(&mut self, index: usize) {
        match self {
            Widget::Rich(page) => page.click(ControlKind::DeleteButton, Some(index)),
            Widget::Plain(page) => page.click(ControlKind::DeleteButton, Some(index)),
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list
    Navigate,
    /// Typing into the entry field
    Insert,
}

/// Main application state
pub struct App {
    pub widget: Widget,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll: usize,
    /// Byte offset of the caret within the entry field
    pub entry_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Share overlay visible (rich widget only)
    pub show_share: bool,
    /// Show key hints in the status row
    pub show_key_hints: bool,
}

impl App {
    pub fn new(widget: Widget, config: &Config) -> Self {
        App {
            widget,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll: 0,
            entry_cursor: 0,
            show_help: false,
            show_share: false,
            show_key_hints: config.ui.show_key_hints,
        }
    }

    /// The rich page, if this session runs the rich widget.
    pub fn page(&self) -> Option<&Page> {
        match &self.widget {
            Widget::Rich(page) => Some(page),
            Widget::Plain(_) => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut Page> {
        match &mut self.widget {
            Widget::Rich(page) => Some(page),
            Widget::Plain(_) => None,
        }
    }

    /// Keep the cursor inside the list after a mutation shrank it.
    pub fn clamp_cursor(&mut self) {
        let len = self.widget.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Run the TUI application
pub fn run(widget: Widget, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(widget, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
