//! List-to-markup projection.
//!
//! Item text is inserted verbatim: a text containing markup-significant
//! characters will read as markup in the output. That is preserved source
//! behavior, documented here rather than silently escaped away.

use crate::model::item::Item;
use crate::model::list::{QuickList, TodoList};

/// Markup for one rich item at its current list position. The position is
/// stamped into `data-index` on both interactive elements; it is only valid
/// until the next mutation re-renders the list.
pub fn todo_item_markup(index: usize, item: &Item) -> String {
    let (classes, checked) = if item.done {
        ("item done", " checked")
    } else {
        ("item", "")
    };

    format!(
        "<li class=\"{classes}\">\
         <input data-index=\"{index}\" type=\"checkbox\" class=\"checkbox\"{checked}>\
         <span>{text}</span>\
         <button data-index=\"{index}\" class=\"delete\">x</button>\
         </li>",
        text = item.text
    )
}

/// Markup for the whole rich list, in store order.
pub fn todo_list_markup(list: &TodoList) -> String {
    let mut html = String::new();
    for (index, item) in list.items.iter().enumerate() {
        html.push_str(&todo_item_markup(index, item));
    }
    html
}

/// Markup for one plain item: no checkbox, no completion class.
pub fn quick_item_markup(index: usize, text: &str) -> String {
    format!(
        "<li class=\"item\">\
         <span>{text}</span>\
         <button data-index=\"{index}\" class=\"delete\">x</button>\
         </li>"
    )
}

/// Markup for the whole plain list, in store order.
pub fn quick_list_markup(list: &QuickList) -> String {
    let mut html = String::new();
    for (index, text) in list.items.iter().enumerate() {
        html.push_str(&quick_item_markup(index, text));
    }
    html
}
