//! Validation and debugging utilities for TernaryTreeMap.
//!
//! Structural invariant checking used by the test suites. Not part of the
//! hot path; traversal here may recurse since it only runs against trees the
//! tests build.

use crate::node::Node;
use crate::types::TernaryTreeMap;

impl<V> TernaryTreeMap<V> {
    /// Check if the tree maintains its structural invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies that every sibling layer is a valid binary search tree over
    /// split characters, that no removable or simplifiable node is left
    /// attached, that the reachable value-node count matches `len`, and that
    /// key iteration is strictly ascending.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let mut value_count = 0;
        if let Some(root) = self.root.as_deref() {
            check_node(root, None, None, &mut value_count)?;
        }

        if value_count != self.len {
            return Err(format!(
                "map reports {} keys but {} value nodes are reachable",
                self.len, value_count
            ));
        }

        let keys: Vec<String> = self.keys().collect();
        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                return Err(format!(
                    "keys out of order at index {}: {:?} >= {:?}",
                    i,
                    keys[i - 1],
                    keys[i]
                ));
            }
        }
        if keys.len() != self.len {
            return Err(format!(
                "iteration produced {} keys but the map reports {}",
                keys.len(),
                self.len
            ));
        }

        Ok(())
    }
}

/// Walk one node: enforce sibling-layer BST bounds, cleanup invariants, and
/// count stored values. The `equal` child starts a fresh layer with no
/// bounds.
fn check_node<V>(
    node: &Node<V>,
    lower_bound: Option<char>,
    upper_bound: Option<char>,
    value_count: &mut usize,
) -> Result<(), String> {
    let character = node.split_character;

    if let Some(bound) = lower_bound {
        if character <= bound {
            return Err(format!(
                "sibling layer order violated: {:?} is not above {:?}",
                character, bound
            ));
        }
    }
    if let Some(bound) = upper_bound {
        if character >= bound {
            return Err(format!(
                "sibling layer order violated: {:?} is not below {:?}",
                character, bound
            ));
        }
    }

    if node.can_be_removed() {
        return Err(format!("unpruned dead node {:?}", character));
    }
    if node.can_be_simplified() {
        return Err(format!("uncollapsed single-child node {:?}", character));
    }

    if node.has_value() {
        *value_count += 1;
    }

    if let Some(lower) = node.lower.as_deref() {
        check_node(lower, lower_bound, Some(character), value_count)?;
    }
    if let Some(higher) = node.higher.as_deref() {
        check_node(higher, Some(character), upper_bound, value_count)?;
    }
    if let Some(equal) = node.equal.as_deref() {
        check_node(equal, None, None, value_count)?;
    }

    Ok(())
}
