//! Grocery list feature module: controllers, filtering, and contracts
//!
//! The list controller observes a shared [`GroceryDataSource`], derives the
//! filtered category sections from the live snapshot plus the user's search
//! text and filter choice, and forwards persistence intents to a
//! caller-supplied [`GroceryListDelegate`]. Presentation stays with the host;
//! this crate only manages state.

pub mod datasource;
pub mod delegate;
pub mod detail;
pub mod error;
pub mod filter;
pub mod list;

pub use datasource::*;
pub use delegate::*;
pub use detail::*;
pub use error::*;
pub use filter::*;
pub use list::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
