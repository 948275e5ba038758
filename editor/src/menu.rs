//! Generic floating context menu.
//!
//! The menu only tracks whether it is open, where it is anchored, and which
//! items it offers. Selecting an item closes the menu first and then hands the
//! item's action back to the caller to run, so no item ever needs to look up
//! how to close its container.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::camera::Offset;

/// One entry in a [`Menu`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
    pub label: String,
    /// Optional icon name for the host to render before the label.
    pub icon: Option<String>,
    pub action: A,
}

impl<A> MenuItem<A> {
    #[must_use]
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self { label: label.into(), icon: None, action }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Open/closed state, anchor, and items of a floating menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu<A> {
    open: bool,
    anchor: Offset,
    items: Vec<MenuItem<A>>,
}

impl<A> Default for Menu<A> {
    fn default() -> Self {
        Self { open: false, anchor: Offset::ZERO, items: Vec::new() }
    }
}

impl<A: Clone> Menu<A> {
    /// A closed, empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu at `anchor` (pixels relative to the reference container).
    pub fn open_at(&mut self, anchor: Offset, items: Vec<MenuItem<A>>) {
        self.open = true;
        self.anchor = anchor;
        self.items = items;
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.items.clear();
        was_open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn anchor(&self) -> Offset {
        self.anchor
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Close the menu and return the action of item `index`.
    ///
    /// `None` (and the menu stays as it was) when the menu is closed or the
    /// index does not exist.
    pub fn select(&mut self, index: usize) -> Option<A> {
        if !self.open {
            return None;
        }
        let action = self.items.get(index)?.action.clone();
        self.close();
        Some(action)
    }
}
