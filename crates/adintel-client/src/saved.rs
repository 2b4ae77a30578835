//! Locally rendered list of saved items

use crate::models::{SavedItem, SavedItemType};

/// Mirror of the saved-item list for the current page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedItems {
    items: Vec<SavedItem>,
}

impl SavedItems {
    pub fn new(items: Vec<SavedItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Whether the backend record `item_id` of `item_type` is bookmarked
    pub fn is_saved(&self, item_type: SavedItemType, item_id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.item_type == item_type && item.item_id == item_id)
    }

    /// Append an item unless one with the same id is already listed
    pub fn insert(&mut self, item: SavedItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with `id`, keeping the others in order
    pub fn remove(&mut self, id: &str) -> Option<SavedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

impl From<Vec<SavedItem>> for SavedItems {
    fn from(items: Vec<SavedItem>) -> Self {
        Self::new(items)
    }
}
