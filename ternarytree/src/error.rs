//! Error handling and result types for TernaryTreeMap operations.
//!
//! Absence of a key is only an error for the direct-read path (`get_item`);
//! `remove` and the `Option`-returning lookups report it as a value.

/// Error type for ternary tree map operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TernaryTreeError {
    /// A key argument was an empty string.
    EmptyKey,
    /// `insert` was called with a key that is already present.
    DuplicateKey(String),
    /// Key not found in the map.
    KeyNotFound,
}

impl TernaryTreeError {
    /// Create a DuplicateKey error for the offending key.
    pub fn duplicate_key(key: &str) -> Self {
        Self::DuplicateKey(key.to_string())
    }

    /// Check if this error is an empty-key error.
    pub fn is_empty_key(&self) -> bool {
        matches!(self, Self::EmptyKey)
    }

    /// Check if this error is a duplicate-key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }
}

impl std::fmt::Display for TernaryTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TernaryTreeError::EmptyKey => write!(f, "Key cannot be an empty string"),
            TernaryTreeError::DuplicateKey(key) => {
                write!(f, "An item with the key {:?} has already been added", key)
            }
            TernaryTreeError::KeyNotFound => write!(f, "The given key was not present in the map"),
        }
    }
}

impl std::error::Error for TernaryTreeError {}

/// Result type for tree operations that may fail.
pub type TreeResult<T> = Result<T, TernaryTreeError>;

/// Result type for key lookup operations.
pub type KeyResult<T> = Result<T, TernaryTreeError>;

/// Result type for tree modification operations.
pub type ModifyResult<T> = Result<T, TernaryTreeError>;
