use shared::domain::{Item, ItemId};

/// Single-item detail selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionTracker {
    selected: Option<ItemId>,
}

impl SelectionTracker {
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn toggle(&mut self, id: ItemId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Looks the selection up in the current view. A selection that is no
    /// longer visible resolves to `None`.
    pub fn resolve<'a>(&self, view: &'a [Item]) -> Option<&'a Item> {
        let id = self.selected?;
        view.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
