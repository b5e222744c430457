//! Controller for the grocery detail screen

use pantry_domain::GroceryItem;

/// Edits a single item: an existing entry opened for details, or a draft
/// handed over from the list's creation flow.
///
/// Persisting the edit stays with the host; this controller only manages the
/// in-progress state and the existing-item suggestions shown while naming a
/// new entry.
pub struct GroceryDetailController {
    item: GroceryItem,
    original: GroceryItem,
    all_items: Vec<GroceryItem>,
}

impl GroceryDetailController {
    pub fn new(item: GroceryItem, all_items: Vec<GroceryItem>) -> Self {
        Self {
            original: item.clone(),
            item,
            all_items,
        }
    }

    /// The item currently under edit.
    pub fn item(&self) -> &GroceryItem {
        &self.item
    }

    /// Whether the edited item is an unsaved draft.
    pub fn is_new_item(&self) -> bool {
        self.item.is_draft()
    }

    /// The reset affordance only applies to existing items.
    pub fn show_reset_button(&self) -> bool {
        !self.is_new_item()
    }

    /// Existing items offered as suggestions while naming a new entry.
    pub fn existing_items(&self) -> Vec<GroceryItem> {
        self.all_items
            .iter()
            .filter(|existing| !existing.is_draft())
            .cloned()
            .collect()
    }

    /// Renames the item under edit.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.item.name = name.into();
    }

    /// Replaces the edit with an existing item picked from the suggestions.
    pub fn select_item(&mut self, item: GroceryItem) {
        self.item = item;
    }

    /// Restores the item to the state it was first presented with.
    pub fn reset_item(&mut self) {
        self.item = self.original.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str) -> GroceryItem {
        GroceryItem {
            id: id.into(),
            name: name.into(),
            purchased: false,
            markets: vec![],
            category_id: String::new(),
            one_time_purchase: false,
        }
    }

    #[test]
    fn drafts_are_new_items_without_reset() {
        let sut = GroceryDetailController::new(GroceryItem::draft("Oat Milk"), vec![]);

        assert!(sut.is_new_item());
        assert!(!sut.show_reset_button());
    }

    #[test]
    fn existing_items_can_be_reset_after_edits() {
        let item = make_item("itemId", "Apples");
        let mut sut = GroceryDetailController::new(item.clone(), vec![]);

        assert!(!sut.is_new_item());
        assert!(sut.show_reset_button());

        sut.set_name("Green Apples");
        assert_eq!(sut.item().name, "Green Apples");

        sut.reset_item();
        assert_eq!(sut.item(), &item);
    }

    #[test]
    fn selecting_a_suggestion_replaces_the_draft() {
        let existing = make_item("itemId", "Apples");
        let mut sut =
            GroceryDetailController::new(GroceryItem::draft("App"), vec![existing.clone()]);

        sut.select_item(existing.clone());

        assert_eq!(sut.item(), &existing);
        assert!(!sut.is_new_item());
    }

    #[test]
    fn suggestions_exclude_drafts() {
        let existing = make_item("itemId", "Apples");
        let sut = GroceryDetailController::new(
            GroceryItem::draft(""),
            vec![existing.clone(), GroceryItem::draft("pending")],
        );

        assert_eq!(sut.existing_items(), vec![existing]);
    }
}
