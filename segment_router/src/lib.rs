//! segment_router &ndash; matches request paths against registered route patterns.
//!
//! Patterns are made of `/` separated segments. A segment is either matched literally, is a named
//! parameter (`:lang`) matching exactly one request segment, or is a glob (`*filepath`) matching
//! the rest of the request path. Patterns are stored in a `Tree` of segments, so matching a request
//! costs time proportional to the depth of its path rather than to the number of routes.
//!
//! Route registration and request dispatch are separate phases: a `Router` is built once, any
//! error while building it is a configuration error, and afterwards it is only read.
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod error;
pub mod helpers;
pub mod router;

pub use crate::error::{InsertError, RouterError};
pub use crate::router::params::Params;
pub use crate::router::tree::Tree;
pub use crate::router::{RouteMatch, Router};
