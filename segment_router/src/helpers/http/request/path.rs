//! Defines helper functions for processing the request path

use crate::helpers::http::PercentDecoded;
use crate::router::tree::segment::split_path;

/// Holder for `Request` URI path segments that have been split into individual segments.
///
/// Used internally by the `Router` when searching its `Tree` instances.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestPathSegments {
    segments: Vec<PercentDecoded>,
}

impl RequestPathSegments {
    /// Creates a new `RequestPathSegments` instance by splitting a `Request` URI path.
    ///
    /// The path is split exactly as patterns are: empty segments are skipped and a segment
    /// beginning with `*` ends the split. Each segment is then percent decoded. So a request path
    /// of `/some/path/to//my%20handler` will be split into segments:
    ///
    /// ```plain
    /// ["some", "path", "to", "my handler"]
    /// ```
    ///
    /// Returns `None` if any segment does not decode to valid UTF-8.
    pub fn new(path: &str) -> Option<Self> {
        let segments = split_path(path)
            .into_iter()
            .map(PercentDecoded::new)
            .collect::<Option<Vec<_>>>()?;

        Some(RequestPathSegments { segments })
    }

    /// Provide the decoded segments.
    pub fn segments(&self) -> &[PercentDecoded] {
        &self.segments
    }
}
