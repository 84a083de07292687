//! The selection store.

use crate::types::{DuplicateKeyPolicy, SelectionConfig};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// Tracks which items of a list are selected.
///
/// Items are identified by the string the key function returns for them, never
/// by their own equality. The store only holds the selected items, in the order
/// they were toggled on or handed to [`select_only_these_items`].
///
/// The key function must be deterministic for the lifetime of the store. A key
/// function that changes its answer for an item leaves the key set out of step
/// with the items, and nothing here detects that.
///
/// [`select_only_these_items`]: SelectionStore::select_only_these_items
pub struct SelectionStore<T, F> {
    /// Maps an item to its identity.
    key_fn: F,

    config: SelectionConfig,

    /// Selected items in selection order.
    selected: Vec<T>,

    /// Keys of `selected`, for membership tests.
    selected_keys: HashSet<String>,
}

impl<T, F> SelectionStore<T, F>
where
    F: Fn(&T) -> String,
{
    /// Create an empty store with the default config.
    pub fn new(key_fn: F) -> Self {
        Self::with_config(key_fn, SelectionConfig::default())
    }

    /// Create an empty store.
    pub fn with_config(key_fn: F, config: SelectionConfig) -> Self {
        Self {
            key_fn,
            config,
            selected: Vec::new(),
            selected_keys: HashSet::new(),
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Apply the key function.
    pub fn key_of(&self, item: &T) -> String {
        (self.key_fn)(item)
    }

    /// Whether an item with the same key as `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected_keys.contains(&self.key_of(item))
    }

    /// Whether `key` is selected.
    pub fn contains_key(&self, key: &str) -> bool {
        self.selected_keys.contains(key)
    }

    /// Selected items in selection order.
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Number of selected items.
    ///
    /// Under [`DuplicateKeyPolicy::Retain`] this can exceed the number of
    /// distinct keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Distinct selected keys, in selection order.
    pub fn selected_keys(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.selected_keys.len());
        self.selected
            .iter()
            .map(|item| self.key_of(item))
            .filter(|key| seen.insert(key.clone()))
            .collect()
    }

    /// Replace the whole selection with `items`, keeping their order.
    ///
    /// Items sharing a key are handled per the configured
    /// [`DuplicateKeyPolicy`].
    pub fn select_only_these_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut keys = HashSet::new();
        let mut selected = Vec::new();
        for item in items {
            let fresh = keys.insert(self.key_of(&item));
            if fresh || self.config.duplicate_keys == DuplicateKeyPolicy::Retain {
                selected.push(item);
            }
        }

        debug!(
            items = selected.len(),
            keys = keys.len(),
            policy = %self.config.duplicate_keys,
            "replaced selection"
        );

        self.selected = selected;
        self.selected_keys = keys;
    }

    /// Flip the selection state of `item`.
    ///
    /// Deselecting removes every selected item sharing the key, not just one.
    /// Selecting appends `item` to the end. Returns whether the key is selected
    /// afterwards.
    pub fn toggle_item(&mut self, item: T) -> bool {
        let key = self.key_of(&item);

        let now_selected = if self.selected_keys.contains(&key) {
            let key_fn = &self.key_fn;
            self.selected.retain(|existing| key_fn(existing) != key);
            false
        } else {
            self.selected.push(item);
            true
        };
        self.rebuild_keys();

        trace!(%key, selected = now_selected, "toggled item");
        now_selected
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        let previous_len = self.selected.len();
        self.selected.clear();
        self.selected_keys.clear();

        debug!(previous_len, "cleared selection");
    }

    /// Consume the store, returning the selected items.
    pub fn into_selected(self) -> Vec<T> {
        self.selected
    }

    /// Recompute the key set from the selected items.
    fn rebuild_keys(&mut self) {
        let key_fn = &self.key_fn;
        self.selected_keys = self.selected.iter().map(key_fn).collect();
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SelectionStore<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("duplicate_keys", &self.config.duplicate_keys)
            .finish_non_exhaustive()
    }
}
