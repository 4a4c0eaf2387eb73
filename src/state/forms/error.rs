//! Error types for field list operations

use std::fmt;
use thiserror::Error;

/// Result type for field list operations
pub type Result<T> = std::result::Result<T, FieldError>;

/// Which kind of position an out-of-range index referred to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Field,
    Option,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Option => write!(f, "option"),
        }
    }
}

/// Rejected field list mutations. The list is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A field or option position outside the current bounds
    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    /// Field type name not in text/radio/checkbox
    #[error("unknown field type: {name}")]
    UnknownFieldType { name: String },
}

impl FieldError {
    pub(crate) fn field_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            target: IndexTarget::Field,
            index,
            len,
        }
    }

    pub(crate) fn option_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            target: IndexTarget::Option,
            index,
            len,
        }
    }
}
