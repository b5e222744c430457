//! User snapshot published by the host

use serde::{Deserialize, Serialize};

/// The current user of the grocery list.
///
/// Both flags are precomputed by the host application; nothing in this
/// module derives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroceryUser {
    pub is_guest: bool,
    pub can_add_new_items: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serde_round_trip() {
        let user = GroceryUser {
            is_guest: true,
            can_add_new_items: false,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: GroceryUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
