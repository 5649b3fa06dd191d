//! Error types for the query engine.

use thiserror::Error;

/// A specialized Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while tokenizing or parsing a filter query.
///
/// These are the only errors the engine raises. Evaluation of a
/// successfully parsed query never fails: unknown field names resolve to
/// non-matching clauses instead of erroring.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The tokenizer rejected the raw input (e.g. an unterminated quote).
    #[error("syntax error at position {position}: {message}")]
    Syntax {
        /// Human-readable description of the problem.
        message: String,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// The parser rejected the token stream (e.g. unbalanced parentheses,
    /// a trailing operator, or a field match missing its value).
    #[error("parse error at position {position}: {message}")]
    Parse {
        /// Human-readable description of the problem.
        message: String,
        /// Byte offset where parsing failed.
        position: usize,
    },
}

impl QueryError {
    /// Creates a syntax error.
    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        QueryError::Syntax {
            message: message.into(),
            position,
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        QueryError::Parse {
            message: message.into(),
            position,
        }
    }

    /// Returns the byte offset the error refers to.
    pub fn position(&self) -> usize {
        match self {
            QueryError::Syntax { position, .. } | QueryError::Parse { position, .. } => *position,
        }
    }
}
