use serde::{Deserialize, Serialize};

use crate::model::item::Item;

/// The rich list: ordered items with completion flags.
///
/// Wraps the item vector so the rest of the crate addresses one owned store
/// rather than a loose `Vec` threaded through every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items marked complete.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }
}

impl FromIterator<Item> for TodoList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        TodoList {
            items: iter.into_iter().collect(),
        }
    }
}

/// The plain list: bare text entries, no completion flag, no persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickList {
    pub items: Vec<String>,
}

impl QuickList {
    pub fn new() -> Self {
        QuickList::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
