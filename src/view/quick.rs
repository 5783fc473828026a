//! The plain-list page widget.
//!
//! The lighter variant of [`crate::view::page::Page`]: bare text entries,
//! add and per-item delete only. No completion flags, no sorting, and no
//! persistence — the sync step here regenerates markup and rebinds
//! controls, nothing more.

use crate::model::list::QuickList;
use crate::ops::list_ops;
use crate::view::controls::{Command, Control, ControlKind};
use crate::view::markup;

pub struct QuickPage {
    pub list: QuickList,
    /// Current contents of the text-entry field.
    pub entry: String,
    /// The list element's current markup.
    pub list_markup: String,
    controls: Vec<Control>,
    focused: Option<(ControlKind, Option<usize>)>,
}

impl QuickPage {
    pub fn new() -> Self {
        let mut page = QuickPage {
            list: QuickList::new(),
            entry: String::new(),
            list_markup: String::new(),
            controls: vec![Control::new(ControlKind::AddButton, None)],
            focused: None,
        };
        page.sync();
        page
    }

    /// Regenerate the markup and rebind controls. Same discipline as the
    /// rich page: item controls are recreated unbound, anything already
    /// bound is left alone.
    pub fn sync(&mut self) {
        self.list_markup = markup::quick_list_markup(&self.list);
        self.controls.retain(|c| !c.kind.is_item_control());
        for index in 0..self.list.len() {
            self.controls
                .push(Control::new(ControlKind::DeleteButton, Some(index)));
        }
        for control in &mut self.controls {
            let command = match control.kind {
                ControlKind::AddButton => Command::Add,
                ControlKind::DeleteButton => Command::Remove,
                // The plain page creates no other control kinds
                _ => continue,
            };
            control.bind(command);
        }
    }

    /// Dispatch a click on a control; see [`crate::view::page::Page::click`].
    pub fn click(&mut self, kind: ControlKind, index: Option<usize>) {
        self.focused = Some((kind, index));
        let Some(control) = self
            .controls
            .iter()
            .find(|c| c.kind == kind && c.index == index)
        else {
            return;
        };
        let target = control.index;
        let commands: Vec<Command> = control.handlers().to_vec();
        for command in commands {
            self.run(command, target);
        }
    }

    /// Enter in the entry field submits it through the add button's binding.
    pub fn submit_entry(&mut self) {
        self.click(ControlKind::AddButton, None);
    }

    fn run(&mut self, command: Command, target: Option<usize>) {
        match command {
            Command::Add => {
                let text = std::mem::take(&mut self.entry);
                self.focused = None;
                list_ops::quick_append(&mut self.list, text);
                self.sync();
            }
            Command::Remove => {
                if let Some(index) = target {
                    list_ops::quick_remove_at(&mut self.list, index);
                    self.sync();
                }
            }
            // Not bound on the plain page
            _ => {}
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }
}

impl Default for QuickPage {
    fn default() -> Self {
        QuickPage::new()
    }
}
