//! Error handling and edge case tests.

use list_select::{SelectionConfig, SelectionError, SelectionStore};

// --- Config Errors ---

#[test]
fn test_malformed_config() {
    let result = SelectionConfig::from_json("{ not json");
    assert!(matches!(result, Err(SelectionError::InvalidConfig(_))));
}

#[test]
fn test_config_wrong_type() {
    let result = SelectionConfig::from_json(r#"{"duplicate_keys": 3}"#);
    assert!(matches!(result, Err(SelectionError::InvalidConfig(_))));
}

#[test]
fn test_config_unknown_fields_ignored() {
    let config = SelectionConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
    assert_eq!(config, SelectionConfig::default());
}

#[test]
fn test_error_display() {
    let err = SelectionError::InvalidConfig("bad".to_string());
    assert_eq!(err.to_string(), "Invalid config: bad");
    let err = SelectionError::Serialization("eof".to_string());
    assert_eq!(err.to_string(), "Serialization error: eof");
}

// --- Selection Edge Cases ---

#[test]
fn test_toggle_on_empty_store_key_collision() {
    // Key function that maps everything to one key
    let mut store = SelectionStore::new(|_: &u32| "same".to_string());

    assert!(store.toggle_item(1));
    assert!(store.is_selected(&2));

    // Toggling a different item with the same key deselects
    assert!(!store.toggle_item(2));
    assert!(store.is_empty());
}

#[test]
fn test_empty_string_key() {
    let mut store = SelectionStore::new(|s: &String| s.clone());

    store.toggle_item(String::new());
    assert!(store.contains_key(""));
    assert_eq!(store.selected_keys(), vec![String::new()]);
}
