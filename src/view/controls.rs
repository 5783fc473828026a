//! Interactive controls and their handler bindings.
//!
//! A control is the crate's record of one interactive element in the
//! rendered markup. Bindings must be exactly-once per control lifetime: a
//! render pass that replaces the list contents destroys the old item
//! controls and creates fresh, unbound ones, while controls that survive a
//! pass (the static buttons) keep their existing binding and must not be
//! bound again.

/// A named operation a control can be bound to. Item controls resolve the
/// target index from their `data-index` attribute at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take the entry field's text and append it as a new item
    Add,
    /// Flip the completion flag of the item under the clicked control
    Toggle,
    /// Remove the item under the clicked control
    Remove,
    /// Reorder items by text, ascending
    SortAscending,
    /// Reorder items by text, descending
    SortDescending,
    /// Remove every item marked complete
    RemoveDone,
}

/// What kind of interactive element a control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    // Static controls, created once at bootstrap
    AddButton,
    SortAscendingButton,
    SortDescendingButton,
    RemoveDoneButton,
    // Per-item controls, recreated by every render pass
    Checkbox,
    DeleteButton,
}

impl ControlKind {
    /// Whether this control lives inside the list element and is therefore
    /// destroyed and recreated whenever the list markup is replaced.
    pub fn is_item_control(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::DeleteButton)
    }
}

/// One interactive element: its kind, its `data-index` attribute (item
/// controls only), and the handlers attached to it.
#[derive(Debug, Clone)]
pub struct Control {
    pub kind: ControlKind,
    pub index: Option<usize>,
    /// The "already has events" marker. Set by the first bind; never
    /// cleared for the lifetime of the control.
    bound: bool,
    /// Attached handlers in attach order. Dispatch runs all of them, so a
    /// duplicate binding would be observable as a double-fired command.
    handlers: Vec<Command>,
}

impl Control {
    pub fn new(kind: ControlKind, index: Option<usize>) -> Self {
        Control {
            kind,
            index,
            bound: false,
            handlers: Vec::new(),
        }
    }

    /// Attach `command` unless this control was already bound in an earlier
    /// pass. Idempotent across repeated render passes.
    pub fn bind(&mut self, command: Command) {
        if self.bound {
            return;
        }
        self.handlers.push(command);
        self.bound = true;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn handlers(&self) -> &[Command] {
        &self.handlers
    }
}
