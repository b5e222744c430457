//! Grocery item and market value types

use serde::{Deserialize, Serialize};

use crate::category::GroceryItemCategory;

/// A single grocery entry with purchase state and category membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroceryItem {
    /// Host-assigned identifier, stable across updates. Empty only on drafts.
    pub id: String,
    /// Display name, also the search target.
    pub name: String,
    pub purchased: bool,
    /// Markets where the item can be found.
    pub markets: Vec<GroceryMarket>,
    pub category_id: String,
    /// Purchasing this item removes it instead of marking it bought.
    pub one_time_purchase: bool,
}

impl GroceryItem {
    /// Returns a copy with the purchase state flipped. Every other field,
    /// including the id, is unchanged.
    pub fn toggle_purchased(&self) -> Self {
        let mut updated = self.clone();
        updated.purchased = !updated.purchased;
        updated
    }

    /// A not-yet-persisted item for the creation flow: empty id, unpurchased,
    /// filed under the default bucket.
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            purchased: false,
            markets: Vec::new(),
            category_id: GroceryItemCategory::OTHER_ID.to_string(),
            one_time_purchase: false,
        }
    }

    /// Whether this item is an unsaved draft.
    pub fn is_draft(&self) -> bool {
        self.id.is_empty()
    }
}

/// A market where a grocery item can be found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroceryMarket {
    pub id: String,
    pub name: String,
}
