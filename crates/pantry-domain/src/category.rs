//! Category grouping for grocery items

use serde::{Deserialize, Serialize};

use crate::item::GroceryItem;

/// A named grouping of grocery items with a presentation color tag.
///
/// Identity and name are immutable once observed; only the item sequence
/// changes, replaced wholesale on each data-source push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroceryItemCategory {
    pub id: String,
    pub name: String,
    /// Items in source order; never re-sorted by this module.
    pub items: Vec<GroceryItem>,
    pub color: CategoryColor,
}

impl GroceryItemCategory {
    /// Identifier of the default bucket new drafts are filed under.
    pub const OTHER_ID: &'static str = "other";
}

/// Presentation color tag for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum CategoryColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl CategoryColor {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serde_round_trip() {
        let category = GroceryItemCategory {
            id: "produce".into(),
            name: "Produce".into(),
            items: vec![GroceryItem {
                id: "1".into(),
                name: "Carrots".into(),
                purchased: false,
                markets: vec![],
                category_id: "produce".into(),
                one_time_purchase: false,
            }],
            color: CategoryColor::Green,
        };
        let json = serde_json::to_string(&category).unwrap();
        let back: GroceryItemCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(category, back);
    }

    #[test]
    fn color_display_names() {
        assert_eq!(CategoryColor::Red.display_name(), "Red");
        assert_eq!(CategoryColor::Green.display_name(), "Green");
        assert_eq!(CategoryColor::Blue.display_name(), "Blue");
        assert_eq!(CategoryColor::Yellow.display_name(), "Yellow");
    }
}
