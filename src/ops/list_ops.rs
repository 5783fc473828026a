use crate::model::item::Item;
use crate::model::list::{QuickList, TodoList};

// ---------------------------------------------------------------------------
// Rich list operations
// ---------------------------------------------------------------------------

/// Append an item to the end of the list. The text is unconstrained; an
/// empty string is a valid item.
pub fn append(list: &mut TodoList, item: Item) {
    list.items.push(item);
}

/// Remove the item at `index`. A stale index (out of current bounds) is a
/// silent no-op: the view may still address an item that a previous
/// mutation removed, and tolerating that is required behavior.
pub fn remove_at(list: &mut TodoList, index: usize) {
    if index < list.items.len() {
        list.items.remove(index);
    }
}

/// Flip the completion flag of the item at `index`. Out-of-bounds indices
/// are tolerated as no-ops, same as [`remove_at`].
pub fn toggle_done(list: &mut TodoList, index: usize) {
    if let Some(item) = list.items.get_mut(index) {
        item.done = !item.done;
    }
}

/// Reorder items by byte-wise comparison of their text, ascending.
pub fn sort_ascending(list: &mut TodoList) {
    list.items.sort_by(|a, b| a.text.cmp(&b.text));
}

/// Reorder items by byte-wise comparison of their text, descending.
pub fn sort_descending(list: &mut TodoList) {
    list.items.sort_by(|a, b| b.text.cmp(&a.text));
}

/// Remove every item marked complete, preserving the relative order of the
/// remainder.
pub fn remove_done(list: &mut TodoList) {
    list.items.retain(|item| !item.done);
}

// ---------------------------------------------------------------------------
// Plain list operations
// ---------------------------------------------------------------------------

/// Append a bare text entry to the plain list.
pub fn quick_append(list: &mut QuickList, text: String) {
    list.items.push(text);
}

/// Remove the plain entry at `index`; stale indices are a silent no-op.
pub fn quick_remove_at(list: &mut QuickList, index: usize) {
    if index < list.items.len() {
        list.items.remove(index);
    }
}
