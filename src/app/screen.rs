//! The state behind the shopping list screen.

use super::snapshot::Snapshot;

/// Returns whether some text is blank, i.e. empty or only whitespace.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The two state cells of the shopping list screen: the items in insertion
/// order, and the not-yet-submitted draft.
///
/// Duplicate items are allowed and are distinct by their position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShoppingListScreen {
    items: Vec<String>,
    draft: String,
}

impl ShoppingListScreen {
    /// Rebuilds a screen from a saved [`Snapshot`].
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            items: snapshot.items,
            draft: snapshot.draft,
        }
    }

    /// Captures the current state as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            draft: self.draft.clone(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the draft. There is no validation per keystroke.
    pub fn update_draft<S: Into<String>>(&mut self, new_text: S) {
        self.draft = new_text.into();
    }

    /// Appends the draft to the end of the list and clears it. A blank draft
    /// is silently ignored and left as-is.
    ///
    /// Returns `true` if an item was added.
    pub fn submit_draft(&mut self) -> bool {
        if is_blank(&self.draft) {
            return false;
        }

        let item = std::mem::take(&mut self.draft);
        crate::debug!("Added item '{item}'.");
        self.items.push(item);

        true
    }

    /// Removes the first item equal to `value`. Later duplicates are kept.
    /// Nothing happens if there is no such item.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove_item(&mut self, value: &str) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                crate::debug!("Removed item '{value}' at position {index}.");
                true
            }
            None => false,
        }
    }
}
