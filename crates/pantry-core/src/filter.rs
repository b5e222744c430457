//! Filter options for the grocery list

use serde::{Deserialize, Serialize};

/// Filter options for displaying grocery list items.
///
/// A non-empty search text overrides the selected filter; see
/// [`GroceryListController`](crate::list::GroceryListController).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum GroceryListFilter {
    /// Show all grocery items, including purchased ones.
    #[default]
    ShowAll,
    /// Hide purchased grocery items.
    HidePurchased,
}

impl GroceryListFilter {
    /// Every filter option, in display order for segmented controls.
    pub const ALL: [Self; 2] = [Self::ShowAll, Self::HidePurchased];

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ShowAll => "Show All",
            Self::HidePurchased => "Hide Purchased",
        }
    }
}
