//! Errors raised while building a route table.
//!
//! Both kinds indicate a misconfigured set of routes and are discoverable when the table is built.
//! Request-time lookups never fail, they only find no match.
use hyper::Method;
use thiserror::Error;

/// Errors raised while inserting a pattern into a `Tree`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InsertError {
    /// The final segment of `pattern` lands on a position already fixed to a different
    /// parameter or glob segment.
    #[error("route `{pattern}` conflicts with `{existing}` at segment `{segment}`")]
    RouteConflict {
        /// The pattern being inserted.
        pattern: String,
        /// The wild segment already present at that position.
        existing: String,
        /// The segment of `pattern` that was expected at that position.
        segment: String,
    },

    /// A whitespace-only segment appears before the end of `pattern`.
    #[error("route `{pattern}` has whitespace segment `{segment}` before its end")]
    InvalidSegment {
        /// The pattern being inserted.
        pattern: String,
        /// The offending segment.
        segment: String,
    },
}

/// Errors raised while registering routes with a `Router`.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The pattern could not be inserted into the tree for `method`.
    #[error("cannot register {method} route")]
    Insert {
        /// Method table the pattern was added to.
        method: Method,
        /// Underlying trie error.
        #[source]
        source: InsertError,
    },

    /// Patterns given to a `Router` must begin with `/`.
    #[error("route `{0}` must begin with '/'")]
    InvalidPattern(String),
}
