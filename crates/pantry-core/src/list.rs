//! Controller for the grocery list screen

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use pantry_domain::{GroceryItem, GroceryItemCategory};

use crate::datasource::GroceryDataSource;
use crate::delegate::GroceryListDelegate;
use crate::error::{GroceryListError, Result};
use crate::filter::GroceryListFilter;

/// Callback invoked when an item is selected for its detail or creation flow.
pub type SelectionHandler = Box<dyn Fn(GroceryItem) + Send>;

/// Controller for the grocery list screen.
///
/// Observes the shared [`GroceryDataSource`], derives the filtered category
/// sections from the live snapshot plus the user's search text and filter
/// choice, keeps the session-local purchased history for undo, and forwards
/// persistence intents to the [`GroceryListDelegate`].
///
/// All operations are expected to run on one owning context (conventionally
/// the UI event loop). Delegate calls are blocking boundaries; local state
/// only changes after the delegate confirms success.
pub struct GroceryListController {
    search_text: String,
    filter: GroceryListFilter,
    /// Derived, filtered view of the source categories.
    categories: Vec<GroceryItemCategory>,
    /// Unfiltered flattening of the source snapshot.
    all_groceries: Vec<GroceryItem>,
    /// Items this controller has observed becoming purchased, oldest first.
    /// Session-local; never persisted.
    purchased_history: Vec<GroceryItem>,
    source_categories: Vec<GroceryItemCategory>,
    updates: Receiver<Vec<GroceryItemCategory>>,
    datasource: Arc<GroceryDataSource>,
    delegate: Arc<dyn GroceryListDelegate>,
    on_selection: SelectionHandler,
}

impl GroceryListController {
    /// Creates a controller subscribed to `datasource`, seeded from its
    /// current snapshot and an optional pre-existing purchased history.
    pub fn new(
        datasource: Arc<GroceryDataSource>,
        delegate: Arc<dyn GroceryListDelegate>,
        purchased_items: Vec<GroceryItem>,
        on_selection: impl Fn(GroceryItem) + Send + 'static,
    ) -> Self {
        let updates = datasource.subscribe();
        let source_categories = datasource.categories();
        let mut controller = Self {
            search_text: String::new(),
            filter: GroceryListFilter::default(),
            categories: Vec::new(),
            all_groceries: Vec::new(),
            purchased_history: purchased_items,
            source_categories,
            updates,
            datasource,
            delegate,
            on_selection: Box::new(on_selection),
        };
        controller.recompute();
        controller
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn filter(&self) -> GroceryListFilter {
        self.filter
    }

    /// The derived category sections currently on display.
    pub fn categories(&self) -> &[GroceryItemCategory] {
        &self.categories
    }

    /// Every item in the source snapshot, unfiltered.
    pub fn all_groceries(&self) -> &[GroceryItem] {
        &self.all_groceries
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: GroceryListFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// Drains pending data-source emissions, in order, into the derived view.
    ///
    /// The owning context calls this whenever the source signals a change.
    /// Each emission replaces the entire base snapshot before the view is
    /// recomputed, so derived updates can never arrive out of order.
    pub fn refresh(&mut self) {
        while let Ok(categories) = self.updates.try_recv() {
            self.source_categories = categories;
            self.recompute();
        }
    }

    /// Whether the undo affordance has anything to undo.
    pub fn has_purchased_items(&self) -> bool {
        !self.purchased_history.is_empty()
    }

    /// Whether every category filtered down to nothing.
    pub fn no_displayable_groceries(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .next()
            .is_none()
    }

    /// Whether item rows should display their associated markets.
    pub fn should_show_markets(&self) -> bool {
        self.datasource.showing_all_groceries()
    }

    /// Shows the details for an item by forwarding it to the selection
    /// handler.
    pub fn show_details(&self, item: &GroceryItem) {
        (self.on_selection)(item.clone());
    }

    /// Toggles an item's purchase state through the delegate.
    ///
    /// One-time purchases are deleted instead of being marked bought,
    /// whatever their current state. On a confirmed save the flipped copy is
    /// appended to the purchased history, or removed from it when the item
    /// was just unpurchased.
    pub fn toggle_purchased(&mut self, item: &GroceryItem) -> Result<()> {
        if item.one_time_purchase {
            return self.delete_item(item);
        }
        let updated = item.toggle_purchased();
        self.delegate.save_item(&updated)?;
        if updated.purchased {
            self.purchased_history.push(updated);
        } else {
            self.remove_from_history(&updated.id);
        }
        Ok(())
    }

    /// Deletes an item through the delegate and drops it from the purchased
    /// history.
    pub fn delete_item(&mut self, item: &GroceryItem) -> Result<()> {
        self.delegate.delete_item(item)?;
        self.remove_from_history(&item.id);
        Ok(())
    }

    /// Unpurchases the most recently purchased item, if any.
    ///
    /// Removal from the history is positional: the last entry is popped
    /// rather than looked up by id, so duplicate ids cannot reorder the undo
    /// stack.
    pub fn undo_last_purchase(&mut self) -> Result<()> {
        let Some(last) = self.purchased_history.last() else {
            return Ok(());
        };
        self.delegate.save_item(&last.toggle_purchased())?;
        self.purchased_history.pop();
        Ok(())
    }

    /// Starts the creation flow for a draft named after the current search
    /// text.
    ///
    /// Fails when the delegate caps the item count and the unfiltered list
    /// has reached it; guest accounts get the guest flavor of the error. The
    /// draft is handed to the selection handler and never persisted here.
    pub fn add_new_item(&self) -> Result<()> {
        if let Some(max) = self.delegate.max_item_count() {
            if self.all_groceries.len() >= max {
                return Err(if self.datasource.user().is_guest {
                    GroceryListError::GuestItemLimitReached
                } else {
                    GroceryListError::ItemLimitReached
                });
            }
        }
        (self.on_selection)(GroceryItem::draft(self.search_text.as_str()));
        Ok(())
    }

    fn recompute(&mut self) {
        self.all_groceries = flatten_items(&self.source_categories);
        self.categories =
            derive_categories(&self.source_categories, &self.search_text, self.filter);
    }

    fn remove_from_history(&mut self, id: &str) {
        if let Some(index) = self
            .purchased_history
            .iter()
            .position(|entry| entry.id == id)
        {
            self.purchased_history.remove(index);
        }
    }
}

/// Filters the source categories against the search text and filter option.
///
/// A non-empty search matches item names case-insensitively and overrides
/// the filter option. Categories left with no items are dropped entirely;
/// item order within surviving categories is source order. Pure and
/// idempotent, so hosts may run it off the owning thread.
fn derive_categories(
    source: &[GroceryItemCategory],
    search_text: &str,
    filter: GroceryListFilter,
) -> Vec<GroceryItemCategory> {
    let needle = search_text.to_lowercase();
    source
        .iter()
        .filter_map(|category| {
            let items: Vec<GroceryItem> = category
                .items
                .iter()
                .filter(|item| {
                    if needle.is_empty() {
                        filter == GroceryListFilter::ShowAll || !item.purchased
                    } else {
                        item.name.to_lowercase().contains(&needle)
                    }
                })
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(GroceryItemCategory {
                    items,
                    ..category.clone()
                })
            }
        })
        .collect()
}

fn flatten_items(source: &[GroceryItemCategory]) -> Vec<GroceryItem> {
    source
        .iter()
        .flat_map(|category| category.items.iter().cloned())
        .collect()
}
