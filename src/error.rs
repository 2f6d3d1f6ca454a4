//! Error types for query-string parsing.

use thiserror::Error;

/// Which clause grammar rejected a sub-clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    OrderBy,
    Filter,
}

impl std::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseKind::OrderBy => write!(f, "An order by condition"),
            ClauseKind::Filter => write!(f, "A filter clause"),
        }
    }
}

/// The main error type for query parsing.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The input is not a syntactically valid absolute URL.
    #[error("Url should be a valid, full URL: '{0}'")]
    InvalidInput(String),

    /// The query string could not be decoded into text.
    #[error("Malformed query string: {0}")]
    MalformedInput(String),

    /// An order by or filter sub-clause does not have the expected shape.
    #[error("{kind} is invalid and resulted in a split of {count} terms: '{clause}'")]
    InvalidClauseShape {
        kind: ClauseKind,
        count: usize,
        clause: String,
    },

    /// Order by direction is neither `asc` nor `desc`.
    #[error("Direction should be either asc or desc, got '{0}'")]
    InvalidDirection(String),

    /// Filter operator is not one of the recognized codes.
    #[error("Filter operator should be eq, ne, gt, ge, lt, le or in, got '{0}'")]
    InvalidOperator(String),

    /// A top, skip or count value has the wrong lexical form.
    #[error("Invalid datatype for {field}: '{value}'")]
    InvalidType { field: &'static str, value: String },

    /// A top or skip value is negative (or does not fit).
    #[error("{field} should be greater or equal to zero, got '{value}'")]
    OutOfRange { field: &'static str, value: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// Create a clause shape error.
    pub fn shape(kind: ClauseKind, count: usize, clause: impl Into<String>) -> Self {
        Self::InvalidClauseShape {
            kind,
            count,
            clause: clause.into(),
        }
    }

    /// Create an invalid type error for a field.
    pub fn invalid_type(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidType {
            field,
            value: value.into(),
        }
    }

    /// Create an out of range error for a field.
    pub fn out_of_range(field: &'static str, value: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
        }
    }
}

/// Result type alias for query parsing.
pub type QueryResult<T> = Result<T, QueryError>;
