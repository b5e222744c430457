//! Persistence contract consumed by the controllers

use pantry_domain::GroceryItem;

use crate::error::Result;

/// The host-side collaborator that persists grocery item changes.
///
/// Implementations own retries, offline queuing, and timeouts. The
/// controllers issue at most one call per operation, propagate any failure
/// unchanged, and mutate no local state until a call returns success.
pub trait GroceryListDelegate: Send + Sync {
    /// Persist the given item, inserting or replacing by id.
    fn save_item(&self, item: &GroceryItem) -> Result<()>;

    /// Remove the given item from persisted state.
    fn delete_item(&self, item: &GroceryItem) -> Result<()>;

    /// Maximum number of items the host allows, if capped.
    fn max_item_count(&self) -> Option<usize> {
        None
    }
}
