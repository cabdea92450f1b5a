//! Defines the `Router`, a table of `Tree` instances keyed by request method.

pub mod params;
pub mod tree;

use std::collections::HashMap;

use hyper::Method;
use log::{debug, trace};

use crate::error::RouterError;
use crate::helpers::http::request::path::RequestPathSegments;
use crate::router::params::Params;
use crate::router::tree::Tree;

/// The result of routing a request: the registered pattern and the parameters bound from the
/// request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Pattern as it was registered.
    pub pattern: &'a str,
    /// Values bound to the pattern's `:name` and `*name` segments.
    pub params: Params,
}

/// Holds one `Tree` per request method and matches request paths against them.
///
/// Routes are registered while the application is being set up, a registration error means the
/// route table itself is wrong. Once built, a `Router` can be shared behind an `Arc` and routed
/// from any number of threads.
///
/// # Examples
///
/// ```rust
/// # use hyper::Method;
/// # use segment_router::router::Router;
/// #
/// # fn main() -> Result<(), segment_router::error::RouterError> {
/// let mut router = Router::new();
/// router.get("/p/:lang/doc")?;
/// router.get("/static/*filepath")?;
/// router.post("/p/:lang")?;
///
/// let found = router.route(&Method::GET, "/p/go/doc").unwrap();
/// assert_eq!(found.pattern, "/p/:lang/doc");
/// assert_eq!(found.params.get("lang"), Some("go"));
///
/// assert!(router.route(&Method::GET, "/p/go").is_none());
/// assert_eq!(router.allowed_methods("/p/go"), vec![Method::POST]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Router {
    trees: HashMap<Method, Tree>,
}

impl Router {
    /// Creates an empty `Router`.
    pub fn new() -> Self {
        Router {
            trees: HashMap::new(),
        }
    }

    /// Registers `pattern` for requests using `method`.
    pub fn add_route(&mut self, method: Method, pattern: &str) -> Result<(), RouterError> {
        if !pattern.starts_with('/') {
            return Err(RouterError::InvalidPattern(pattern.to_owned()));
        }

        debug!(" adding route {} `{}`", method, pattern);
        self.trees
            .entry(method.clone())
            .or_insert_with(Tree::new)
            .insert(pattern)
            .map_err(|source| RouterError::Insert { method, source })
    }

    /// Shortcut for `add_route(Method::GET, pattern)`.
    pub fn get(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::GET, pattern)
    }

    /// Shortcut for `add_route(Method::HEAD, pattern)`.
    pub fn head(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::HEAD, pattern)
    }

    /// Shortcut for `add_route(Method::POST, pattern)`.
    pub fn post(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::POST, pattern)
    }

    /// Shortcut for `add_route(Method::PUT, pattern)`.
    pub fn put(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::PUT, pattern)
    }

    /// Shortcut for `add_route(Method::PATCH, pattern)`.
    pub fn patch(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::PATCH, pattern)
    }

    /// Shortcut for `add_route(Method::DELETE, pattern)`.
    pub fn delete(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::DELETE, pattern)
    }

    /// Shortcut for `add_route(Method::OPTIONS, pattern)`.
    pub fn options(&mut self, pattern: &str) -> Result<(), RouterError> {
        self.add_route(Method::OPTIONS, pattern)
    }

    /// Borrow the `Tree` holding the routes registered for `method`.
    pub fn tree(&self, method: &Method) -> Option<&Tree> {
        self.trees.get(method)
    }

    /// Matches a raw request `path` against the routes registered for `method`.
    ///
    /// Returns `None` when no route matches, including when the path does not percent decode to
    /// valid UTF-8.
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        let tree = self.trees.get(method)?;
        let rps = RequestPathSegments::new(path)?;
        let pattern = match tree.search(rps.segments()).and_then(|node| node.pattern()) {
            Some(pattern) => pattern,
            None => {
                trace!(" no {} route for `{}`", method, path);
                return None;
            }
        };

        Some(RouteMatch {
            pattern,
            params: Params::bind(pattern, rps.segments()),
        })
    }

    /// Every method with a route matching `path`, ordered by method name.
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let rps = match RequestPathSegments::new(path) {
            Some(rps) => rps,
            None => return vec![],
        };

        let mut methods: Vec<Method> = self
            .trees
            .iter()
            .filter(|(_, tree)| tree.search(rps.segments()).is_some())
            .map(|(method, _)| method.clone())
            .collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
    }
}
