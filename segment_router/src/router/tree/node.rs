//! Defines `Node` for `Tree`.

use log::trace;

use crate::error::InsertError;
use crate::router::tree::segment::SegmentType;

/// A recursive member of `Tree` representative of a single segment in a registered pattern.
///
/// A `Node` which is the last segment of a registered pattern holds that pattern and is said to be
/// routable. Intermediate nodes have no pattern, so reaching one while searching is not a match.
#[derive(Debug)]
pub struct Node {
    segment: String,
    segment_type: SegmentType,
    pattern: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates the synthetic root, which has an empty segment.
    pub(crate) fn root() -> Self {
        Node::new("")
    }

    pub(crate) fn new(segment: &str) -> Self {
        let segment_type = SegmentType::of(segment);
        trace!(" creating node `{}` ({:?})", segment, segment_type);
        Node {
            segment: segment.to_owned(),
            segment_type,
            pattern: None,
            children: vec![],
        }
    }

    /// Provides the segment this `Node` represents, as registered.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Provides the type of segment this `Node` represents.
    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// True if this `Node` is a parameter or glob segment.
    pub fn is_wild(&self) -> bool {
        self.segment_type.is_wild()
    }

    /// The full pattern registered to end at this `Node`, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// True if a pattern ends at this `Node`.
    pub fn is_routable(&self) -> bool {
        self.pattern.is_some()
    }

    /// True if there is at least one child `Node` present.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in the order they were created.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Registers `pattern` below this `Node`, where `parts` is the split pattern and `height` the
    /// number of parts already consumed to reach this `Node`.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        parts: &[&str],
        height: usize,
    ) -> Result<(), InsertError> {
        if parts.len() == height {
            // Only the segment fixed by the first pattern through a wild slot may end there.
            if self.is_wild() {
                if let Some(expected) = height.checked_sub(1).and_then(|i| parts.get(i)) {
                    if self.segment != *expected {
                        trace!(
                            " conflict at `{}` inserting `{}` (expected `{}`)",
                            self.segment,
                            pattern,
                            expected
                        );
                        return Err(InsertError::RouteConflict {
                            pattern: pattern.to_owned(),
                            existing: self.segment.clone(),
                            segment: (*expected).to_owned(),
                        });
                    }
                }
            }

            trace!(" registering `{}` at `{}`", pattern, self.segment);
            self.pattern = Some(pattern.to_owned());
            return Ok(());
        }

        let part = parts[height];
        if part.trim().is_empty() && parts.len() > height + 1 {
            return Err(InsertError::InvalidSegment {
                pattern: pattern.to_owned(),
                segment: part.to_owned(),
            });
        }

        let index = match self.match_child(part) {
            Some(index) => {
                let child = &self.children[index];
                if child.is_wild() && SegmentType::of(part).is_wild() && child.segment != part {
                    trace!(
                        " conflict at `{}` inserting `{}` (renamed to `{}`)",
                        child.segment,
                        pattern,
                        part
                    );
                    return Err(InsertError::RouteConflict {
                        pattern: pattern.to_owned(),
                        existing: child.segment.clone(),
                        segment: part.to_owned(),
                    });
                }
                index
            }
            None => {
                trace!(" adding child `{}` to `{}`", part, self.segment);
                self.children.push(Node::new(part));
                self.children.len() - 1
            }
        };

        self.children[index].insert(pattern, parts, height + 1)
    }

    /// Recursively searches children for the routable `Node` matching `segments`, starting with
    /// `segments[height]`.
    ///
    /// Candidate children are tried in creation order and the first one leading to a routable
    /// `Node` wins. A glob `Node` ends the search regardless of how many segments remain.
    pub(crate) fn search<S>(&self, segments: &[S], height: usize) -> Option<&Node>
    where
        S: AsRef<str>,
    {
        if segments.len() == height || self.segment_type == SegmentType::Glob {
            return if self.is_routable() {
                trace!(" found leaf node `{}`", self.segment);
                Some(self)
            } else {
                trace!(" node `{}` is not routable", self.segment);
                None
            };
        }

        let part = segments[height].as_ref();
        self.match_children(part)
            .into_iter()
            .find_map(|child| child.search(segments, height + 1))
    }

    /// Position of the first child which `part` would be inserted into.
    ///
    /// Once a wild child exists every later static segment at this position is funneled into it.
    /// A clash with a static segment is only reported by the terminal check in `insert`.
    fn match_child(&self, part: &str) -> Option<usize> {
        self.children.iter().position(|child| child.is_match(part))
    }

    /// Every child which may match the request segment `part`, in creation order.
    fn match_children(&self, part: &str) -> Vec<&Node> {
        self.children
            .iter()
            .filter(|child| child.is_match(part))
            .collect()
    }

    fn is_match(&self, part: &str) -> bool {
        self.segment == part || self.is_wild()
    }
}
