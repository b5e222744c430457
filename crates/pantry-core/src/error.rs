//! Error types for the grocery list module

use thiserror::Error;

/// Result type alias for grocery list operations
pub type Result<T> = std::result::Result<T, GroceryListError>;

/// Errors surfaced by grocery list operations.
///
/// Every variant is recoverable; the controllers retry nothing themselves and
/// leave user-facing messaging to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum GroceryListError {
    /// The delegate-reported item cap has been reached
    #[error("Grocery item limit reached")]
    ItemLimitReached,

    /// The item cap has been reached for a guest account
    #[error("Grocery item limit reached for guest accounts")]
    GuestItemLimitReached,

    /// Failure reported by the persistence delegate, propagated unchanged
    #[error("Delegate error: {0}")]
    Delegate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(GroceryListError::ItemLimitReached
            .to_string()
            .contains("limit reached"));
        assert!(GroceryListError::GuestItemLimitReached
            .to_string()
            .contains("guest"));

        let err = GroceryListError::Delegate("save failed".into());
        assert!(err.to_string().contains("save failed"));
    }
}
