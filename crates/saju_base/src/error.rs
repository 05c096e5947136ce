//! Error types for reference-table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing reference-table values out of text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// The text names no known value of the given table.
    UnknownName {
        table: &'static str,
        name: String,
    },
}

impl BaseError {
    pub(crate) fn unknown(table: &'static str, name: &str) -> Self {
        Self::UnknownName {
            table,
            name: name.to_string(),
        }
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { table, name } => write!(f, "unknown {table} name: '{name}'"),
        }
    }
}

impl Error for BaseError {}
