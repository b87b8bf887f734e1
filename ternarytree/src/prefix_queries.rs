//! Prefix queries for TernaryTreeMap: exact-prefix enumeration and bounded
//! fuzzy (edit-distance) prefix search.
//!
//! The fuzzy search fuses the classic Levenshtein dynamic-programming
//! recurrence with tree traversal. Work items are `(node, row)` pairs on an
//! explicit stack, where `row` holds the costs of transforming every prefix
//! of the search string into the key path ending just above the node.
//! Sibling hops reuse the parent row unchanged (they test an alternative
//! character at the same key position), `equal` hops advance the row by one
//! character, and a branch whose row minimum exceeds the budget is dropped:
//! the recurrence only ever adds non-negative costs along an `equal` chain,
//! so the minimum is a valid lower bound.

use crate::error::{TernaryTreeError, TreeResult};
use crate::iteration::ValueIterator;
use crate::node::Node;
use crate::tree;
use crate::types::{SearchMatch, TernaryTreeMap};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the values of every key starting with a given prefix.
#[derive(Debug)]
pub struct PrefixIterator<'a, V> {
    /// Value stored at the prefix itself, if the exact prefix is a key.
    exact: Option<&'a V>,
    /// Values of all strictly longer keys below the prefix terminal.
    descendants: ValueIterator<'a, V>,
}

/// Iterator over fuzzy prefix search hits.
#[derive(Debug)]
pub struct FuzzySearchIterator<'a, V> {
    search: Vec<char>,
    max_edit_distance: usize,
    stack: Vec<(&'a Node<V>, Vec<usize>)>,
    /// Subtree being emitted wholesale after an accepted node.
    draining: Option<SubtreeDrain<'a, V>>,
}

#[derive(Debug)]
struct SubtreeDrain<'a, V> {
    values: ValueIterator<'a, V>,
    edit_distance: usize,
}

// ============================================================================
// MAP QUERY METHODS
// ============================================================================

impl<V> TernaryTreeMap<V> {
    /// Returns the values of all keys starting with `prefix`, including the
    /// value stored at `prefix` itself if present.
    ///
    /// The prefix does not have to be a stored key; any key extending it is
    /// still found. Fails with [`TernaryTreeError::EmptyKey`] for an empty
    /// prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// for key in ["testa", "testb", "test", "tesk"] {
    ///     map.insert(key, key.to_string()).unwrap();
    /// }
    ///
    /// let mut matched: Vec<&String> = map.starts_with("test").unwrap().collect();
    /// matched.sort();
    /// assert_eq!(matched, [&"test", &"testa", &"testb"]);
    /// ```
    pub fn starts_with(&self, prefix: &str) -> TreeResult<PrefixIterator<'_, V>> {
        if prefix.is_empty() {
            return Err(TernaryTreeError::EmptyKey);
        }

        let terminal = tree::find_node(self.root.as_deref(), prefix);
        Ok(PrefixIterator {
            exact: terminal.and_then(|node| node.value()),
            descendants: ValueIterator::new(terminal.and_then(|node| node.equal.as_deref())),
        })
    }

    /// Returns every stored value whose key matches `search` as a prefix
    /// within `max_edit_distance` single-character edits, paired with the
    /// reported distance.
    ///
    /// When a tree node is accepted, all keys extending it inherit that
    /// node's distance; the per-key distance is not recomputed. Fails with
    /// [`TernaryTreeError::EmptyKey`] for an empty search string.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternarytree::TernaryTreeMap;
    ///
    /// let mut map = TernaryTreeMap::new();
    /// map.insert("lurcheck", 1).unwrap();
    /// map.insert("luarcheck", 2).unwrap();
    ///
    /// let hits: Vec<_> = map
    ///     .starts_with_fuzzy("lurarcheck", 1)
    ///     .unwrap()
    ///     .map(|hit| (*hit.value, hit.edit_distance))
    ///     .collect();
    /// assert_eq!(hits, [(2, 1)]);
    /// ```
    pub fn starts_with_fuzzy(
        &self,
        search: &str,
        max_edit_distance: usize,
    ) -> TreeResult<FuzzySearchIterator<'_, V>> {
        if search.is_empty() {
            return Err(TernaryTreeError::EmptyKey);
        }

        let search: Vec<char> = search.chars().collect();
        // Row 0: transforming each prefix of the search string into the
        // empty path costs its length in deletions.
        let initial_row: Vec<usize> = (0..=search.len()).collect();
        let stack = self
            .root
            .as_deref()
            .map(|root| (root, initial_row))
            .into_iter()
            .collect();

        Ok(FuzzySearchIterator {
            search,
            max_edit_distance,
            stack,
            draining: None,
        })
    }
}

// ============================================================================
// PREFIXITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, V> Iterator for PrefixIterator<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.exact.take().or_else(|| self.descendants.next())
    }
}

// ============================================================================
// FUZZYSEARCHITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, V> FuzzySearchIterator<'a, V> {
    /// Advance `row` across `split_character`, returning the new row and its
    /// minimum.
    fn advance_row(&self, row: &[usize], split_character: char) -> (Vec<usize>, usize) {
        let mut new_row = vec![0; row.len()];
        new_row[0] = row[0] + 1;
        let mut min_in_row = new_row[0];

        for i in 1..row.len() {
            let substitution = usize::from(self.search[i - 1] != split_character);
            new_row[i] = (row[i] + 1)
                .min(new_row[i - 1] + 1)
                .min(row[i - 1] + substitution);
            min_in_row = min_in_row.min(new_row[i]);
        }

        (new_row, min_in_row)
    }
}

impl<'a, V> Iterator for FuzzySearchIterator<'a, V> {
    type Item = SearchMatch<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(drain) = self.draining.as_mut() {
                if let Some(value) = drain.values.next() {
                    return Some(SearchMatch::new(value, drain.edit_distance));
                }
                self.draining = None;
            }

            let (node, row) = self.stack.pop()?;

            // Siblings test a different character at the same key position,
            // so the row they inherit must be the parent's, unchanged.
            if let Some(lower) = node.lower.as_deref() {
                self.stack.push((lower, row.clone()));
            }
            if let Some(higher) = node.higher.as_deref() {
                self.stack.push((higher, row.clone()));
            }

            let (new_row, min_in_row) = self.advance_row(&row, node.split_character);
            let distance = new_row[self.search.len()];

            if distance <= self.max_edit_distance
                && (new_row[0] == self.search.len() || node.has_value())
            {
                // Accepted: everything below the equal chain matches at this
                // distance, so the whole subtree is emitted instead of being
                // walked further.
                if let Some(equal) = node.equal.as_deref() {
                    self.draining = Some(SubtreeDrain {
                        values: ValueIterator::new(Some(equal)),
                        edit_distance: distance,
                    });
                }
                if let Some(value) = node.value() {
                    return Some(SearchMatch::new(value, distance));
                }
            } else if min_in_row <= self.max_edit_distance {
                if let Some(equal) = node.equal.as_deref() {
                    self.stack.push((equal, new_row));
                }
            }
        }
    }
}
