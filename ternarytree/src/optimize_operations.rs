//! Sibling-layer rebalancing for TernaryTreeMap.
//!
//! Lower/higher placement depends on insertion order, so inserting keys in
//! sorted order degrades a sibling layer into a linked chain and lookups
//! within that layer into a linear scan. `optimize` rebuilds every layer
//! into a balanced binary search tree over its split characters. Equal
//! links are never touched, so key-to-value mappings are unaffected.

use crate::node::Node;
use crate::types::TernaryTreeMap;

impl<V> TernaryTreeMap<V> {
    /// Rebalance every sibling layer in place.
    ///
    /// Purely a performance operation: which keys map to which values is
    /// unchanged. Safe to call at any time, repeatedly, and on an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// for key in ["a", "b", "c", "d", "e"] {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// map.optimize();
    /// assert!(map.contains_key("c"));
    /// assert_eq!(map.len(), 5);
    /// ```
    pub fn optimize(&mut self) {
        // Worklist of sibling-layer entry slots: the root layer first, then
        // the layer below every equal link.
        let mut layers: Vec<&mut Option<Box<Node<V>>>> = vec![&mut self.root];

        while let Some(entry) = layers.pop() {
            rebuild_layer(entry);

            let mut members: Vec<&mut Node<V>> = Vec::new();
            if let Some(node) = entry.as_deref_mut() {
                members.push(node);
            }
            while let Some(node) = members.pop() {
                let (lower, equal, higher) = node.links_mut();
                if let Some(lower) = lower.as_deref_mut() {
                    members.push(lower);
                }
                if let Some(higher) = higher.as_deref_mut() {
                    members.push(higher);
                }
                layers.push(equal);
            }
        }
    }
}

/// Rebuild one sibling layer into a balanced binary search tree.
fn rebuild_layer<V>(entry: &mut Option<Box<Node<V>>>) {
    let Some(first) = entry.take() else {
        return;
    };

    // Detach the whole layer into a flat list. The layer may be an
    // arbitrarily long chain, so this walks with an explicit stack.
    let mut pending = vec![first];
    let mut layer: Vec<Box<Node<V>>> = Vec::new();
    while let Some(mut node) = pending.pop() {
        if let Some(lower) = node.lower.take() {
            pending.push(lower);
        }
        if let Some(higher) = node.higher.take() {
            pending.push(higher);
        }
        layer.push(node);
    }

    // Split characters are unique within a layer.
    layer.sort_unstable_by_key(|node| node.split_character);

    let mut slots: Vec<Option<Box<Node<V>>>> = layer.into_iter().map(Some).collect();
    *entry = rebuild_balanced(&mut slots);
}

/// Midpoint-first rebuild of a sorted slice of detached siblings.
fn rebuild_balanced<V>(slots: &mut [Option<Box<Node<V>>>]) -> Option<Box<Node<V>>> {
    if slots.is_empty() {
        return None;
    }

    let middle = slots.len() / 2;
    let mut node = slots[middle].take()?;
    node.lower = rebuild_balanced(&mut slots[..middle]);
    node.higher = rebuild_balanced(&mut slots[middle + 1..]);
    Some(node)
}
