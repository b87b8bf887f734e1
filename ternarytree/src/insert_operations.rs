//! INSERT operations for TernaryTreeMap.
//!
//! Strict insertion and upsert share one lazy-creation walk; they differ
//! only in what happens when the terminal node already holds a value.
//! Intermediate nodes created for a key that then fails to insert are
//! harmless: presence is determined by stored values, not node existence.

use crate::error::{ModifyResult, TernaryTreeError};
use crate::node::Node;
use crate::tree;
use crate::types::TernaryTreeMap;

impl<V> TernaryTreeMap<V> {
    /// Add a key-value pair to the map.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, [`TernaryTreeError::DuplicateKey`] if the key is
    /// already present (the existing value and the count are left
    /// untouched), or [`TernaryTreeError::EmptyKey`] for an empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("one", 1).unwrap();
    /// assert!(map.insert("one", 10).unwrap_err().is_duplicate_key());
    /// assert_eq!(map.get("one"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> ModifyResult<()> {
        let node = self.terminal_node_for(key)?;
        if node.has_value() {
            return Err(TernaryTreeError::duplicate_key(key));
        }

        node.set_value(value);
        self.len += 1;
        Ok(())
    }

    /// Insert or overwrite the value for a key.
    ///
    /// # Returns
    ///
    /// The previous value if the key was already present, `None` if this
    /// was the first insertion for the key. Fails only with
    /// [`TernaryTreeError::EmptyKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// assert_eq!(map.set("one", 1).unwrap(), None);
    /// assert_eq!(map.set("one", 10).unwrap(), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: &str, value: V) -> ModifyResult<Option<V>> {
        let node = self.terminal_node_for(key)?;
        let previous = node.set_value(value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Validate the key and walk/create the path to its terminal node.
    fn terminal_node_for(&mut self, key: &str) -> ModifyResult<&mut Node<V>> {
        if key.is_empty() {
            return Err(TernaryTreeError::EmptyKey);
        }
        let key: Vec<char> = key.chars().collect();
        Ok(tree::create_nodes(&mut self.root, &key))
    }
}
