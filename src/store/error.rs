//! Store error types
//!
//! Absence of a key is never an error in this crate (see the module docs of
//! [`super::storage`]); errors only cover construction-time misconfiguration.

/// Error type for store construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The configured capacity ceiling was zero
    InvalidCapacity(usize),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidCapacity(cap) => {
                write!(f, "Invalid store capacity: {}", cap)
            }
        }
    }
}

impl std::error::Error for StoreError {}
