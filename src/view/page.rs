//! The rich-list page widget.
//!
//! `Page` owns the whole widget state: the item list, the text-entry value,
//! the rendered list markup with its interactive controls, and the share
//! address. [`Page::sync`] is the model-to-view settle step every command
//! ends with: it regenerates the markup, rebinds controls without
//! double-binding, re-encodes the list into the location fragment, and
//! refreshes the QR image reference.

use crate::codec::fragment::{CodecError, decode_fragment, encode_fragment};
use crate::codec::share::{Location, qr_image_url};
use crate::model::config::ShareConfig;
use crate::model::item::Item;
use crate::model::list::TodoList;
use crate::ops::list_ops;
use crate::view::controls::{Command, Control, ControlKind};
use crate::view::markup;

/// The live widget for the rich list.
pub struct Page {
    /// The item store. Exclusively owned; every mutation goes through a
    /// dispatched command followed by [`Page::sync`].
    pub list: TodoList,
    /// Current contents of the text-entry field.
    pub entry: String,
    /// The page address; its fragment carries the encoded list.
    pub location: Location,
    /// Current QR image reference (a GET URL, never fetched here).
    pub qr_src: String,
    /// The list element's current markup.
    pub list_markup: String,
    share: ShareConfig,
    controls: Vec<Control>,
    focused: Option<(ControlKind, Option<usize>)>,
}

impl Page {
    /// A fresh page with an empty list at the configured base address.
    pub fn new(share: ShareConfig) -> Self {
        let location = Location::new(share.base_url.clone());
        let mut page = Page {
            list: TodoList::new(),
            entry: String::new(),
            location,
            qr_src: String::new(),
            list_markup: String::new(),
            share,
            controls: static_controls(),
            focused: None,
        };
        page.sync();
        page
    }

    /// Open a shared link: decode the fragment into the starting list. An
    /// absent or empty fragment yields an empty list; a malformed one fails
    /// fast rather than opening a page that silently dropped state.
    pub fn open(href: &str, share: ShareConfig) -> Result<Self, CodecError> {
        let location = Location::parse(href);
        let list = decode_fragment(&location.fragment)?;
        let mut page = Page {
            list,
            entry: String::new(),
            location,
            qr_src: String::new(),
            list_markup: String::new(),
            share,
            controls: static_controls(),
            focused: None,
        };
        page.sync();
        Ok(page)
    }

    /// The model-to-view synchronization routine. Safe to call repeatedly:
    /// a second sync on an unchanged list produces identical markup and
    /// leaves every control with exactly one binding.
    pub fn sync(&mut self) {
        // Regenerate the list markup. Replacing it destroys the old item
        // elements, so their controls go too; fresh, unbound ones are
        // created for the new markup. Static controls live outside the
        // list element and survive.
        self.list_markup = markup::todo_list_markup(&self.list);
        self.controls.retain(|c| !c.kind.is_item_control());
        for index in 0..self.list.len() {
            self.controls.push(Control::new(ControlKind::Checkbox, Some(index)));
            self.controls.push(Control::new(ControlKind::DeleteButton, Some(index)));
        }

        // Attach handlers to anything not already bound.
        for control in &mut self.controls {
            control.bind(command_for(control.kind));
        }

        // Re-encode the list into the page address and refresh the QR
        // image reference with the updated address.
        self.location.fragment = encode_fragment(&self.list);
        self.qr_src = qr_image_url(&self.share, &self.location.href());
    }

    /// Dispatch a click on a control. Focus moves to the control, its bound
    /// handlers are snapshotted (the first may re-render and replace the
    /// control), and each runs to completion in turn. A click on a control
    /// that no longer exists is ignored.
    pub fn click(&mut self, kind: ControlKind, index: Option<usize>) {
        self.focused = Some((kind, index));
        let Some(control) = self
            .controls
            .iter()
            .find(|c| c.kind == kind && c.index == index)
        else {
            return;
        };
        // The target index is read off the clicked control now, at
        // interaction time; it must never be cached across mutations.
        let target = control.index;
        let commands: Vec<Command> = control.handlers().to_vec();
        for command in commands {
            self.run(command, target);
        }
    }

    /// Enter in the entry field submits it through the add button's
    /// binding, same path as a click.
    pub fn submit_entry(&mut self) {
        self.click(ControlKind::AddButton, None);
    }

    /// Run one command handler: exactly one store mutation (add also clears
    /// the entry field), an optional blur, then the sync settle step.
    /// Handlers never invoke each other.
    fn run(&mut self, command: Command, target: Option<usize>) {
        match command {
            Command::Add => {
                let text = std::mem::take(&mut self.entry);
                self.blur();
                list_ops::append(&mut self.list, Item::new(text));
                self.sync();
            }
            Command::Toggle => {
                if let Some(index) = target {
                    list_ops::toggle_done(&mut self.list, index);
                    self.sync();
                }
            }
            Command::Remove => {
                if let Some(index) = target {
                    list_ops::remove_at(&mut self.list, index);
                    self.sync();
                }
            }
            Command::SortAscending => {
                self.blur();
                list_ops::sort_ascending(&mut self.list);
                self.sync();
            }
            Command::SortDescending => {
                self.blur();
                list_ops::sort_descending(&mut self.list);
                self.sync();
            }
            Command::RemoveDone => {
                self.blur();
                list_ops::remove_done(&mut self.list);
                self.sync();
            }
        }
    }

    fn blur(&mut self) {
        self.focused = None;
    }

    /// The control currently holding focus, if any.
    pub fn focused(&self) -> Option<(ControlKind, Option<usize>)> {
        self.focused
    }

    /// All live controls, static first, then item controls in render order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }
}

/// The four controls that exist outside the list element, created unbound
/// at bootstrap and bound by the first sync.
fn static_controls() -> Vec<Control> {
    vec![
        Control::new(ControlKind::AddButton, None),
        Control::new(ControlKind::SortAscendingButton, None),
        Control::new(ControlKind::SortDescendingButton, None),
        Control::new(ControlKind::RemoveDoneButton, None),
    ]
}

/// Which command each control kind is bound to.
fn command_for(kind: ControlKind) -> Command {
    match kind {
        ControlKind::AddButton => Command::Add,
        ControlKind::SortAscendingButton => Command::SortAscending,
        ControlKind::SortDescendingButton => Command::SortDescending,
        ControlKind::RemoveDoneButton => Command::RemoveDone,
        ControlKind::Checkbox => Command::Toggle,
        ControlKind::DeleteButton => Command::Remove,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page_with(texts: &[&str]) -> Page {
        let mut page = Page::new(ShareConfig::default());
        for text in texts {
            page.entry = text.to_string();
            page.submit_entry();
        }
        page
    }

    fn item_texts(page: &Page) -> Vec<&str> {
        page.list.items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_new_page_is_empty_and_synced() {
        let page = Page::new(ShareConfig::default());
        assert!(page.list.is_empty());
        assert_eq!(page.list_markup, "");
        assert_eq!(page.location.fragment, "%5B%5D");
        assert!(page.qr_src.contains("data=https%3A%2F%2Flyst.page%2F%23%255B%255D"));
    }

    #[test]
    fn test_add_renders_one_item() {
        let page = page_with(&["Buy milk"]);
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.list.items[0].text, "Buy milk");
        assert!(!page.list.items[0].done);
        assert!(page.list_markup.contains("<span>Buy milk</span>"));
    }

    #[test]
    fn test_add_clears_entry_and_blurs() {
        let mut page = Page::new(ShareConfig::default());
        page.entry = "note".to_string();
        page.submit_entry();
        assert_eq!(page.entry, "");
        assert_eq!(page.focused(), None);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut page = page_with(&["a", "b"]);
        let markup_before = page.list_markup.clone();
        let fragment_before = page.location.fragment.clone();
        page.sync();
        page.sync();
        assert_eq!(page.list_markup, markup_before);
        assert_eq!(page.location.fragment, fragment_before);
    }

    #[test]
    fn test_every_control_bound_exactly_once_across_renders() {
        let mut page = page_with(&["a", "b", "c"]);
        for _ in 0..5 {
            page.sync();
        }
        // 4 static + 2 per item
        assert_eq!(page.controls().len(), 4 + 3 * 2);
        for control in page.controls() {
            assert_eq!(control.handlers().len(), 1, "{:?}", control.kind);
        }
    }

    #[test]
    fn test_click_delete_removes_exactly_one_after_rerenders() {
        let mut page = page_with(&["a", "b", "c"]);
        page.sync();
        page.sync();
        page.click(ControlKind::DeleteButton, Some(1));
        assert_eq!(item_texts(&page), vec!["a", "c"]);
    }

    #[test]
    fn test_click_on_destroyed_control_is_ignored() {
        let mut page = page_with(&["a", "b"]);
        // After removing index 1, no control with data-index 1 exists
        page.click(ControlKind::DeleteButton, Some(1));
        page.click(ControlKind::DeleteButton, Some(1));
        assert_eq!(item_texts(&page), vec!["a"]);
    }

    #[test]
    fn test_toggle_reflects_in_markup_and_fragment() {
        let mut page = page_with(&["a"]);
        page.click(ControlKind::Checkbox, Some(0));
        assert!(page.list.items[0].done);
        assert!(page.list_markup.contains("item done"));
        assert!(page.location.fragment.contains("true"));
        // Toggling keeps focus on the checkbox (no blur)
        assert_eq!(page.focused(), Some((ControlKind::Checkbox, Some(0))));
        page.click(ControlKind::Checkbox, Some(0));
        assert!(!page.list.items[0].done);
    }

    #[test]
    fn test_sort_buttons() {
        let mut page = page_with(&["banana", "apple", "cherry"]);
        page.click(ControlKind::SortAscendingButton, None);
        assert_eq!(item_texts(&page), vec!["apple", "banana", "cherry"]);
        assert_eq!(page.focused(), None);
        page.click(ControlKind::SortDescendingButton, None);
        assert_eq!(item_texts(&page), vec!["cherry", "banana", "apple"]);
    }

    #[test]
    fn test_remove_done_button() {
        let mut page = page_with(&["a", "b", "c", "d"]);
        page.click(ControlKind::Checkbox, Some(1));
        page.click(ControlKind::Checkbox, Some(2));
        page.click(ControlKind::RemoveDoneButton, None);
        assert_eq!(item_texts(&page), vec!["a", "d"]);
    }

    #[test]
    fn test_open_round_trips_through_href() {
        let mut page = page_with(&["milk & eggs", "#urgent"]);
        page.click(ControlKind::Checkbox, Some(0));
        let href = page.location.href();

        let reopened = Page::open(&href, ShareConfig::default()).unwrap();
        assert_eq!(reopened.list, page.list);
        assert_eq!(reopened.list_markup, page.list_markup);
    }

    #[test]
    fn test_open_without_fragment_starts_empty() {
        let page = Page::open("https://lyst.page/", ShareConfig::default()).unwrap();
        assert!(page.list.is_empty());
    }

    #[test]
    fn test_open_malformed_fragment_fails_fast() {
        assert!(Page::open("https://lyst.page/#garbage", ShareConfig::default()).is_err());
    }

    #[test]
    fn test_qr_payload_tracks_current_address() {
        let mut page = Page::new(ShareConfig::default());
        let qr_before = page.qr_src.clone();
        page.entry = "x".to_string();
        page.submit_entry();
        assert_ne!(page.qr_src, qr_before);
    }
}
