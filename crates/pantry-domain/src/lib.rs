//! Grocery domain types shared between the pantry feature modules
//!
//! This crate provides the canonical value types for the grocery list:
//! - GroceryItem: a single grocery entry with purchase state
//! - GroceryMarket: a store where an item can be found
//! - GroceryItemCategory: a named, color-tagged grouping of items
//! - GroceryUser: guest status and add permission

pub mod category;
pub mod item;
pub mod user;

pub use category::*;
pub use item::*;
pub use user::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
