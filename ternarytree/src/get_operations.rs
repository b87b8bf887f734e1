//! GET operations for TernaryTreeMap.
//!
//! Read paths for the map: value lookup, membership, and the failing
//! direct-read variant. A node that merely sits on the path of longer keys
//! does not count as present; only nodes holding a value do.

use crate::error::{KeyResult, TernaryTreeError};
use crate::tree;
use crate::types::TernaryTreeMap;

impl<V> TernaryTreeMap<V> {
    /// Get a reference to the value associated with a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// A reference to the value if the key exists, `None` otherwise. An
    /// empty key is never present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("one", 1).unwrap();
    /// assert_eq!(map.get("one"), Some(&1));
    /// assert_eq!(map.get("two"), None);
    /// assert_eq!(map.get("on"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        tree::find_value_node(self.root.as_deref(), key).and_then(|node| node.value())
    }

    /// Get a mutable reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("one", 1).unwrap();
    /// if let Some(value) = map.get_mut("one") {
    ///     *value = 10;
    /// }
    /// assert_eq!(map.get("one"), Some(&10));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        tree::find_node_mut(self.root.as_deref_mut(), key).and_then(|node| node.value_mut())
    }

    /// Check if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("one", 1).unwrap();
    /// assert!(map.contains_key("one"));
    /// assert!(!map.contains_key("two"));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for a key, returning an error if the key doesn't exist.
    ///
    /// # Returns
    ///
    /// A reference to the value, or [`TernaryTreeError::KeyNotFound`] if the
    /// key is absent and [`TernaryTreeError::EmptyKey`] for an empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("one", 1).unwrap();
    /// assert_eq!(map.get_item("one").unwrap(), &1);
    /// assert!(map.get_item("two").is_err());
    /// ```
    pub fn get_item(&self, key: &str) -> KeyResult<&V> {
        if key.is_empty() {
            return Err(TernaryTreeError::EmptyKey);
        }
        self.get(key).ok_or(TernaryTreeError::KeyNotFound)
    }
}
