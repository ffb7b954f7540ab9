//! Option list management
//!
//! Holds the ordered list of option strings and converts it to and
//! from the persisted JSON form. All mutation goes through this type;
//! frontends only ever read the list.

use serde::{Deserialize, Serialize};

use crate::{Result, SpinPickError};

pub mod storage;

/// On-disk document: a single `options` array of strings.
#[derive(Debug, Serialize, Deserialize)]
struct SavedOptionsFile {
    options: Vec<String>,
}

/// Ordered store of option strings.
///
/// Insertion order is preserved and meaningful: display order equals
/// storage order. Duplicates are allowed and treated as distinct
/// entries. Every element is non-empty after trimming; `add` rejects
/// anything else before insertion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionStore {
    options: Vec<String>,
}

impl OptionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `text` and append it to the end of the list.
    /// Returns the new length. Whitespace-only input is rejected.
    pub fn add(&mut self, text: &str) -> Result<usize> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SpinPickError::Validation(
                "option text is empty after trimming".to_string(),
            ));
        }
        self.options.push(trimmed.to_string());
        Ok(self.options.len())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.options.len() {
            return Err(SpinPickError::Index {
                index,
                len: self.options.len(),
            });
        }
        Ok(self.options.remove(index))
    }

    /// Remove the first occurrence equal to `text`, returning its index
    pub fn remove_value(&mut self, text: &str) -> Result<usize> {
        match self.options.iter().position(|opt| opt == text) {
            Some(index) => {
                self.options.remove(index);
                Ok(index)
            }
            None => Err(SpinPickError::NotFound(text.to_string())),
        }
    }

    /// Empty the list. Idempotent.
    pub fn clear(&mut self) {
        self.options.clear();
    }

    /// Number of options in the list
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Produce the persisted JSON form: `{"options": [...]}` with
    /// 2-space indentation and non-ASCII characters written literally.
    pub fn serialize(&self) -> Result<String> {
        let file = SavedOptionsFile {
            options: self.options.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Parse `content` and replace the list wholesale.
    ///
    /// Strict on structure: the top-level value must be an object with
    /// an `options` array of strings. Anything else fails with a
    /// `Format` error and leaves the store untouched. Unknown keys and
    /// whitespace variations are accepted. Returns the new count.
    pub fn deserialize(&mut self, content: &str) -> Result<usize> {
        // Parse fully before touching the list so a failure cannot
        // leave a partial replacement behind.
        let file: SavedOptionsFile = serde_json::from_str(content)?;
        self.options = file.options;
        Ok(self.options.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = OptionStore::new();
        assert_eq!(store.add("  Pizza  ").unwrap(), 1);
        assert_eq!(store.add("Sushi").unwrap(), 2);
        assert_eq!(store.options(), &["Pizza".to_string(), "Sushi".to_string()]);
    }

    #[test]
    fn test_add_rejects_empty_and_whitespace() {
        let mut store = OptionStore::new();
        store.add("Tacos").unwrap();

        for bad in ["", "   ", "\t\n"] {
            let err = store.add(bad).unwrap_err();
            assert!(matches!(err, SpinPickError::Validation(_)));
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn test_duplicates_are_distinct_entries() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();
        store.add("Pizza").unwrap();
        assert_eq!(store.len(), 2);

        // Value removal only takes the first occurrence
        assert_eq!(store.remove_value("Pizza").unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_at() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();
        store.add("Sushi").unwrap();
        store.add("Tacos").unwrap();

        assert_eq!(store.remove_at(1).unwrap(), "Sushi");
        assert_eq!(store.options(), &["Pizza".to_string(), "Tacos".to_string()]);
    }

    #[test]
    fn test_remove_at_out_of_bounds_leaves_list_unchanged() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();
        store.add("Sushi").unwrap();

        let err = store.remove_at(5).unwrap_err();
        assert!(matches!(err, SpinPickError::Index { index: 5, len: 2 }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_value_miss() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();

        let err = store.remove_value("Sushi").unwrap_err();
        assert!(matches!(err, SpinPickError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_serialize_shape_and_indentation() {
        let mut store = OptionStore::new();
        store.add("Option A").unwrap();
        store.add("Option B").unwrap();

        let json = store.serialize().unwrap();
        assert!(json.starts_with("{\n  \"options\": ["));
        assert!(json.contains("\"Option A\""));
        assert!(json.contains("\"Option B\""));
    }

    #[test]
    fn test_serialize_preserves_non_ascii_literally() {
        let mut store = OptionStore::new();
        store.add("火锅").unwrap();
        store.add("Crème brûlée").unwrap();

        let json = store.serialize().unwrap();
        assert!(json.contains("火锅"));
        assert!(json.contains("Crème brûlée"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();
        store.add("Sushi").unwrap();
        store.add("Tacos").unwrap();

        let json = store.serialize().unwrap();
        let mut restored = OptionStore::new();
        assert_eq!(restored.deserialize(&json).unwrap(), 3);
        assert_eq!(restored, store);
    }

    #[test]
    fn test_deserialize_replaces_wholesale() {
        let mut store = OptionStore::new();
        store.add("Old A").unwrap();
        store.add("Old B").unwrap();

        let count = store
            .deserialize("{\"options\": [\"New\"]}")
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.options(), &["New".to_string()]);
    }

    #[test]
    fn test_deserialize_accepts_whitespace_and_unknown_keys() {
        let mut store = OptionStore::new();
        let content = "  {\n\t\"options\" : [ \"A\" ],\n  \"comment\": 42\n}  ";
        assert_eq!(store.deserialize(content).unwrap(), 1);
    }

    #[test]
    fn test_deserialize_rejects_non_string_elements() {
        let mut store = OptionStore::new();
        store.add("Pizza").unwrap();

        let err = store.deserialize("{\"options\": [1, 2, 3]}").unwrap_err();
        assert!(matches!(err, SpinPickError::Format(_)));
        // Failed parse leaves the previous contents in place
        assert_eq!(store.options(), &["Pizza".to_string()]);
    }

    #[test]
    fn test_deserialize_rejects_missing_options_key() {
        let mut store = OptionStore::new();
        let err = store.deserialize("{\"choices\": []}").unwrap_err();
        assert!(matches!(err, SpinPickError::Format(_)));
    }

    #[test]
    fn test_deserialize_rejects_non_object_top_level() {
        let mut store = OptionStore::new();
        for bad in ["[\"A\", \"B\"]", "\"options\"", "42", "not json at all"] {
            let err = store.deserialize(bad).unwrap_err();
            assert!(matches!(err, SpinPickError::Format(_)));
            assert!(store.is_empty());
        }
    }
}
