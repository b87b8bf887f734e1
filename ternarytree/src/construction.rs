//! Construction for TernaryTreeMap.

use crate::types::TernaryTreeMap;

impl<V> TernaryTreeMap<V> {
    /// Create an empty map.
    ///
    /// Nodes are allocated lazily, one per new character position, as keys
    /// are inserted; a fresh map owns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let map = TernaryTreeMap::<i32>::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<V> Default for TernaryTreeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
