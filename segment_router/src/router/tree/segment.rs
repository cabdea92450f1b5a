//! Defines `SegmentType` and path splitting for `Tree`.

/// Prefix marking a segment which matches exactly one request segment and binds it by name.
pub const PARAM_PREFIX: char = ':';

/// Prefix marking a segment which matches the remainder of the request path.
pub const GLOB_PREFIX: char = '*';

/// Indicates the type of segment which is being represented by a `Node`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum SegmentType {
    /// Is matched exactly (string equality) to the corresponding segment for incoming request
    /// paths.
    Static,

    /// Matches any single corresponding segment for incoming request paths, e.g. `:lang`.
    Dynamic,

    /// Matches all remaining segments of incoming request paths, e.g. `*filepath`.
    Glob,
}

impl SegmentType {
    /// Derives the type of a registered segment from its first character.
    pub fn of(segment: &str) -> Self {
        match segment.chars().next() {
            Some(PARAM_PREFIX) => SegmentType::Dynamic,
            Some(GLOB_PREFIX) => SegmentType::Glob,
            _ => SegmentType::Static,
        }
    }

    /// True for `Dynamic` and `Glob` segments.
    pub fn is_wild(self) -> bool {
        self != SegmentType::Static
    }
}

/// Splits a pattern or request path into its non-empty segments.
///
/// Leading, trailing and repeated `/` are ignored. Splitting stops after the first segment which
/// begins with `*`, as that segment consumes the rest of the path.
///
/// ```rust
/// # use segment_router::router::tree::segment::split_path;
/// assert_eq!(split_path("//p/:lang//doc/"), vec!["p", ":lang", "doc"]);
/// assert_eq!(split_path("/static/*filepath/ignored"), vec!["static", "*filepath"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        parts.push(segment);
        if segment.starts_with(GLOB_PREFIX) {
            break;
        }
    }
    parts
}
