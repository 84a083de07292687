//! # List Select
//!
//! Selection state for list and table widgets: which rows the user has
//! picked, in the order they picked them.
//!
//! ## Core Concepts
//!
//! - **Key function**: maps each item to a stable string identity
//! - **Selection**: ordered items plus the set of their keys
//!
//! Redrawing after a change is left to the caller. Every mutation takes
//! `&mut self`, so the owning widget knows exactly when to re-render.
//!
//! ## Example
//!
//! ```
//! use list_select::SelectionStore;
//!
//! #[derive(Clone, Debug)]
//! struct Row {
//!     id: u32,
//!     name: String,
//! }
//!
//! let mut store = SelectionStore::new(|row: &Row| row.id.to_string());
//!
//! let alice = Row { id: 1, name: "alice".into() };
//! let bob = Row { id: 2, name: "bob".into() };
//!
//! store.toggle_item(alice.clone());
//! store.toggle_item(bob.clone());
//! assert!(store.is_selected(&alice));
//!
//! store.select_only_these_items(vec![bob.clone()]);
//! assert!(!store.is_selected(&alice));
//! assert_eq!(store.selected()[0].name, "bob");
//!
//! store.clear();
//! assert!(store.is_empty());
//! ```

pub mod error;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, SelectionError};
pub use store::SelectionStore;
pub use types::*;
