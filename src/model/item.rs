use serde::{Deserialize, Serialize};

/// A single list entry: the text the user typed plus a completion flag.
///
/// Items have no identity beyond their position in the list. The position
/// shown in the view is recomputed on every render and is only valid until
/// the next mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The text describing the item. May be empty.
    pub text: String,
    /// Whether the item has been marked complete.
    pub done: bool,
}

impl Item {
    /// Create a new, not-yet-completed item.
    pub fn new(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            done: false,
        }
    }
}
