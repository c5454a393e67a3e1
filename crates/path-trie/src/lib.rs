//! # path-trie
//!
//! A trie-based URL path matcher. Patterns are registered with a payload
//! (typically a handler) and incoming paths are resolved to that payload plus
//! the named parameters they capture.
//!
//! Supported segment forms:
//! - Literals (`/about`, `/v1.2`)
//! - Literal alternatives (`/post|page`)
//! - Regex segments (`/(\w{3,30})`)
//! - Named parameters (`/users/:id`)
//! - Named alternatives (`/:kind(post|page)`)
//! - Named regex parameters (`/users/:id(\d+)`)
//!
//! ## Matching Rules
//!
//! - Paths are percent-decoded before matching
//! - Traversal is depth-first and tries edges in definition order
//! - A failed branch backtracks and discards its captures
//! - The first complete match wins; there is no priority ranking, so
//!   define `/haha` before `/(\w+)` to prefer the literal
//!
//! ## Example
//!
//! ```
//! use path_trie::Router;
//!
//! let mut router = Router::new();
//! router.define("/users/new", "new_user").unwrap();
//! router.define(r"/users/:id(\d+)", "show_user").unwrap();
//! router.define("/:kind(post|page)/:slug", "content").unwrap();
//!
//! let route_match = router.match_route("/users/42").unwrap();
//! assert_eq!(*route_match.payload, "show_user");
//! assert_eq!(route_match.param("id"), Some("42"));
//!
//! let route_match = router.match_route("/page/about-us").unwrap();
//! assert_eq!(route_match.param("kind"), Some("page"));
//! assert_eq!(route_match.param("slug"), Some("about-us"));
//!
//! assert!(router.match_route("/users/abc").is_none());
//! ```
//!
//! ## Concurrency
//!
//! `define` takes `&mut self` and `match_route` takes `&self`: build the
//! table first, then share the router (e.g. behind an `Arc`) for lookups.

use std::collections::HashMap;

use tracing::{debug, trace};

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod node;
pub mod path;
pub mod route;

pub use error::RouteError;
pub use node::Node;
pub use path::{decode_path, split_segments};
pub use route::{parse_fragment, parse_pattern, SegmentOption, SegmentPattern};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Result of matching a path against the router
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    /// Payload registered for the matched pattern
    pub payload: &'a T,
    /// Named parameters captured along the matched branch
    pub params: HashMap<String, String>,
}

impl<'a, T> RouteMatch<'a, T> {
    /// Captured value for `name`, if the matched branch bound it
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Path router backed by a trie of [`SegmentOption`] edges
#[derive(Debug, Clone)]
pub struct Router<T> {
    root: Node<T>,
    routes_defined: usize,
}

// ============================================================================
// Router Implementation
// ============================================================================

impl<T> Router<T> {
    /// Creates an empty router
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            routes_defined: 0,
        }
    }

    /// Registers `pattern` with `payload`
    ///
    /// The whole pattern is compiled before the trie is touched, so an error
    /// leaves the router unchanged. Defining an existing pattern again
    /// replaces its payload without adding nodes.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MissingLeadingSlash`] if `pattern` does not start with `/`
    /// - [`RouteError::InvalidFragment`] for a segment outside the grammar
    /// - [`RouteError::InvalidRegex`] for a regex segment that fails to compile
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::{Router, RouteError};
    ///
    /// let mut router = Router::new();
    /// router.define("/a|b|c", 1).unwrap();
    ///
    /// assert!(matches!(router.define("a", 2), Err(RouteError::MissingLeadingSlash(_))));
    /// assert!(matches!(router.define("/:id([)", 2), Err(RouteError::InvalidRegex { .. })));
    /// ```
    pub fn define(&mut self, pattern: &str, payload: T) -> Result<(), RouteError>
    where
        T: Clone,
    {
        let levels = parse_pattern(pattern)?;
        let terminals = self.root.insert(&levels, &payload);
        self.routes_defined += 1;

        debug!(
            pattern,
            depth = levels.len(),
            terminals,
            nodes = self.root.node_count(),
            "route defined"
        );

        Ok(())
    }

    /// Resolves `path`, reporting a missing leading slash as an error
    ///
    /// Returns `Ok(None)` for malformed percent-encoding or when no pattern
    /// matches. Captured values are the decoded segment text; if a name is
    /// captured twice along one branch, the deeper value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::{Router, RouteError};
    ///
    /// let mut router = Router::new();
    /// router.define(r"/:_id(@\w+)", ()).unwrap();
    ///
    /// let route_match = router.try_match_route("/%40haha").unwrap().unwrap();
    /// assert_eq!(route_match.param("_id"), Some("@haha"));
    ///
    /// assert!(router.try_match_route("/%zz").unwrap().is_none());
    /// assert!(matches!(
    ///     router.try_match_route("haha"),
    ///     Err(RouteError::MissingLeadingSlash(_))
    /// ));
    /// ```
    pub fn try_match_route(&self, path: &str) -> Result<Option<RouteMatch<'_, T>>, RouteError> {
        let Some(decoded) = decode_path(path) else {
            debug!(path, "rejecting path with malformed percent-encoding");
            return Ok(None);
        };

        if !decoded.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(decoded.into_owned()));
        }

        let segments: Vec<&str> = split_segments(&decoded).collect();
        let mut captures = Vec::new();
        let found = self.root.descend(&segments, &mut captures);

        trace!(path, matched = found.is_some(), "route lookup");

        Ok(found.map(|payload| RouteMatch {
            payload,
            params: captures
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }))
    }

    /// Resolves `path` to its payload and captured parameters
    ///
    /// Every failure (bad encoding, missing leading slash, no matching
    /// pattern) is reported as `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_trie::Router;
    ///
    /// let mut router = Router::new();
    /// router.define("/haha", "literal").unwrap();
    /// router.define(r"/(\w{3,30})", "regex").unwrap();
    ///
    /// let route_match = router.match_route("/haha").unwrap();
    /// assert_eq!(*route_match.payload, "literal");
    /// assert!(route_match.params.is_empty());
    ///
    /// assert_eq!(*router.match_route("/hoho").unwrap().payload, "regex");
    /// assert!(router.match_route("haha").is_none());
    /// ```
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        self.try_match_route(path).unwrap_or_else(|err| {
            debug!(%err, "route lookup rejected");
            None
        })
    }

    /// Root of the trie, for inspection
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Total trie nodes, root included
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of successful `define` calls, redefinitions included
    pub fn routes_defined(&self) -> usize {
        self.routes_defined
    }

    /// True until the first successful `define`
    pub fn is_empty(&self) -> bool {
        self.root.children().next().is_none()
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
