//! Defines a hierarchical `Tree` with subtrees of `Node`.

use log::trace;

use crate::error::InsertError;
use crate::router::tree::node::Node;
use crate::router::tree::segment::split_path;

pub mod node;
pub mod segment;

/// A hierarchical structure that provides a root `Node` and subtrees of linked nodes that
/// represent registered patterns.
///
/// Patterns are inserted while the route table is built; afterwards the `Tree` is only searched.
/// `insert` needs `&mut self` and `search` only `&self`, so a finished `Tree` can be shared between
/// threads freely.
///
/// ```rust
/// # use segment_router::router::tree::Tree;
/// let mut tree = Tree::new();
/// tree.insert("/p/:lang/doc").unwrap();
/// tree.insert("/static/*filepath").unwrap();
///
/// assert_eq!(tree.lookup("/p/go/doc"), Some("/p/:lang/doc"));
/// assert_eq!(tree.lookup("/static/css/site.css"), Some("/static/*filepath"));
/// assert_eq!(tree.lookup("/p/go"), None);
/// ```
#[derive(Debug)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Creates a new `Tree` and root `Node`.
    pub fn new() -> Self {
        trace!(" creating new tree");
        Tree { root: Node::root() }
    }

    /// Borrow the root `Node`.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Registers `pattern`.
    ///
    /// Inserting the same pattern again has no further effect. Fails if the final segment lands
    /// on a parameter or glob with a different name, or if a segment other than the last is only
    /// whitespace.
    pub fn insert(&mut self, pattern: &str) -> Result<(), InsertError> {
        let parts = split_path(pattern);
        trace!(" inserting `{}` as {:?}", pattern, parts);

        // Validate before descending so a rejected pattern creates no nodes.
        let interior = parts.split_last().map_or(&[][..], |(_, rest)| rest);
        if let Some(segment) = interior.iter().find(|part| part.trim().is_empty()) {
            return Err(InsertError::InvalidSegment {
                pattern: pattern.to_owned(),
                segment: (*segment).to_owned(),
            });
        }

        self.root.insert(pattern, &parts, 0)
    }

    /// Finds the routable `Node` matching the already split request path `segments`.
    pub fn search<S>(&self, segments: &[S]) -> Option<&Node>
    where
        S: AsRef<str>,
    {
        trace!(" starting tree traversal");
        self.root.search(segments, 0)
    }

    /// Splits `path` and returns the pattern it matches.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.search(&split_path(path)).and_then(Node::pattern)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn tree_with(patterns: &[&str]) -> Tree {
        let mut tree = Tree::new();
        for pattern in patterns {
            tree.insert(pattern).unwrap();
        }
        tree
    }

    #[test]
    fn literal_patterns_match_themselves() {
        let patterns = ["/", "/a", "/a/b", "/a/b/c", "/hello/world", "/x/y/z/w"];
        let tree = tree_with(&patterns);

        for pattern in patterns.iter() {
            assert_eq!(tree.lookup(pattern), Some(*pattern));
        }
    }

    #[test]
    fn named_parameters_match_one_segment() {
        let tree = tree_with(&["/p/:lang/doc"]);

        assert_eq!(tree.lookup("/p/go/doc"), Some("/p/:lang/doc"));
        assert_eq!(tree.lookup("/p/rust/doc"), Some("/p/:lang/doc"));
        assert_eq!(tree.lookup("/p/go"), None);
        assert_eq!(tree.lookup("/p/go/doc/more"), None);
    }

    #[test]
    fn glob_consumes_remaining_segments() {
        let tree = tree_with(&["/static/*filepath"]);

        assert_eq!(tree.lookup("/static/a"), Some("/static/*filepath"));
        assert_eq!(tree.lookup("/static/a/b/c"), Some("/static/*filepath"));
        assert_eq!(
            tree.search(&["static", "a", "b", "c", "d"])
                .and_then(Node::pattern),
            Some("/static/*filepath")
        );
    }

    #[test]
    fn glob_needs_at_least_one_segment() {
        let tree = tree_with(&["/static/*filepath"]);

        assert_eq!(tree.lookup("/static"), None);
        assert_eq!(tree.lookup("/static/"), None);
    }

    #[test]
    fn different_parameter_names_conflict() {
        let mut tree = tree_with(&["/p/:lang/doc"]);

        let err = tree.insert("/p/:locale/doc").unwrap_err();
        assert_eq!(
            err,
            InsertError::RouteConflict {
                pattern: "/p/:locale/doc".to_owned(),
                existing: ":lang".to_owned(),
                segment: ":locale".to_owned(),
            }
        );

        tree.insert("/p/:lang").unwrap();
        assert!(tree.insert("/p/:locale").is_err());

        assert_eq!(tree.lookup("/p/go/doc"), Some("/p/:lang/doc"));
        assert_eq!(tree.lookup("/p/go"), Some("/p/:lang"));
    }

    #[test]
    fn whitespace_interior_segment_is_invalid() {
        let mut tree = Tree::new();

        let err = tree.insert("/p/ /doc").unwrap_err();
        assert_eq!(
            err,
            InsertError::InvalidSegment {
                pattern: "/p/ /doc".to_owned(),
                segment: " ".to_owned(),
            }
        );

        // A trailing whitespace segment is allowed.
        tree.insert("/p/ ").unwrap();
        assert_eq!(tree.lookup("/p/ "), Some("/p/ "));
    }

    #[test]
    fn whitespace_interior_segment_on_existing_nodes_is_invalid() {
        let mut tree = tree_with(&["/p/ ", "/q/:lang"]);

        assert!(matches!(
            tree.insert("/p/ /doc"),
            Err(InsertError::InvalidSegment { .. })
        ));
        assert!(matches!(
            tree.insert("/q/ /doc"),
            Err(InsertError::InvalidSegment { .. })
        ));
        assert_eq!(tree.lookup("/p/ /doc"), None);
        assert_eq!(tree.lookup("/q/go/doc"), None);
    }

    #[test]
    fn rejected_insert_leaves_tree_unchanged() {
        let mut tree = Tree::new();

        let err = tree.insert("/z/:id/ /x").unwrap_err();
        assert_eq!(
            err,
            InsertError::InvalidSegment {
                pattern: "/z/:id/ /x".to_owned(),
                segment: " ".to_owned(),
            }
        );
        assert!(tree.root().children().is_empty());

        tree.insert("/z/:other").unwrap();
        tree.insert("/y/list").unwrap();
        tree.insert("/y/:id").unwrap();
        assert_eq!(tree.lookup("/z/1"), Some("/z/:other"));
        assert_eq!(tree.lookup("/y/list"), Some("/y/list"));
        assert_eq!(tree.lookup("/y/7"), Some("/y/:id"));
    }

    #[test]
    fn reinserting_is_idempotent() {
        let mut tree = tree_with(&["/p/:lang/doc", "/static/*filepath"]);
        let before = (tree.lookup("/p/go/doc"), tree.lookup("/static/a/b"));
        let before = (before.0.map(str::to_owned), before.1.map(str::to_owned));

        tree.insert("/p/:lang/doc").unwrap();
        tree.insert("/static/*filepath").unwrap();

        assert_eq!(tree.lookup("/p/go/doc").map(str::to_owned), before.0);
        assert_eq!(tree.lookup("/static/a/b").map(str::to_owned), before.1);
        assert_eq!(tree.root().children().len(), 2);
    }

    #[test]
    fn deeper_paths_without_glob_do_not_match() {
        let tree = tree_with(&["/a/b", "/a/:x/c"]);

        assert_eq!(tree.lookup("/a/b/c/d"), None);
        assert_eq!(tree.lookup("/a/b/c"), Some("/a/:x/c"));
    }

    #[test]
    fn search_is_pure() {
        let tree = tree_with(&["/p/go", "/p/:lang/doc", "/static/*filepath"]);

        let first: Vec<Option<&str>> = ["/p/go/doc", "/p/go", "/x", "/static/y"]
            .iter()
            .map(|p| tree.lookup(p))
            .collect();
        for _ in 0..100 {
            let again: Vec<Option<&str>> = ["/p/go/doc", "/p/go", "/x", "/static/y"]
                .iter()
                .map(|p| tree.lookup(p))
                .collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn literal_then_parameter_coexist_as_siblings() {
        let tree = tree_with(&["/p/go", "/p/:lang"]);

        let p = &tree.root().children()[0];
        let segments: Vec<&str> = p.children().iter().map(Node::segment).collect();
        assert_eq!(segments, vec!["go", ":lang"]);

        assert_eq!(tree.lookup("/p/go"), Some("/p/go"));
        assert_eq!(tree.lookup("/p/rust"), Some("/p/:lang"));
    }

    #[test]
    fn parameter_then_literal_conflicts() {
        let mut tree = tree_with(&["/p/:lang"]);

        let err = tree.insert("/p/go").unwrap_err();
        assert!(matches!(err, InsertError::RouteConflict { .. }));
        assert_eq!(tree.lookup("/p/go"), Some("/p/:lang"));
    }

    #[test]
    fn literal_below_parameter_is_funneled() {
        let tree = tree_with(&["/p/:lang", "/p/go/doc"]);

        let p = &tree.root().children()[0];
        assert_eq!(p.children().len(), 1);
        assert_eq!(p.children()[0].children()[0].segment(), "doc");

        assert_eq!(tree.lookup("/p/python/doc"), Some("/p/go/doc"));
        assert_eq!(tree.lookup("/p/python"), Some("/p/:lang"));
    }

    #[test]
    fn concurrent_readers_see_the_same_routes() {
        let tree = Arc::new(tree_with(&["/p/:lang/doc", "/static/*filepath", "/about"]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = Arc::clone(&tree);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| {
                            (
                                tree.lookup("/p/go/doc").map(str::to_owned),
                                tree.lookup("/static/a/b").map(str::to_owned),
                                tree.lookup("/missing").map(str::to_owned),
                            )
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for result in handle.join().unwrap() {
                assert_eq!(
                    result,
                    (
                        Some("/p/:lang/doc".to_owned()),
                        Some("/static/*filepath".to_owned()),
                        None
                    )
                );
            }
        }
    }
}
