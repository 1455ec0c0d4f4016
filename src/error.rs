//! A module for the errors surfaced by the analysis routines.

use std::fmt::Debug;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition failures. Algorithms never fail midway for valid input, every variant is
/// detected before a traversal starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The vertex isn't part of the graph's vertex set.
    #[error("vertex not found in graph: {0}")]
    UnknownVertex(String),
    /// The text doesn't name a degree mode.
    #[error("unknown degree mode `{0}`, expected one of `in`, `out` or `total`")]
    UnknownDegreeMode(String),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl Error {
    pub(crate) fn unknown_vertex<T: Debug>(vertex: &T) -> Self {
        Self::UnknownVertex(format!("{vertex:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vertex_message() {
        let err = Error::unknown_vertex(&"a");

        assert_eq!(err, Error::UnknownVertex("\"a\"".to_owned()));
        assert_eq!(err.to_string(), "vertex not found in graph: \"a\"");
    }
}
