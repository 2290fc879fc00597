//! Route registration and request matching

use crate::error::Result;
use crate::node::PathNode;
use crate::pattern::{split_path, Pattern, TAIL_KEY};
use std::collections::HashMap;
use tracing::debug;

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, T> {
    /// The value registered for the matched route
    pub value: &'a T,
    /// Captured parameters as (name, value) pairs, in path order
    pub params: Vec<(String, String)>,
    /// Unconsumed remainder of the request path, without leading `/`
    pub tail: Option<String>,
}

impl<'a, T> Match<'a, T> {
    /// Get a captured parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get the unconsumed tail, if any
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Params as a HashMap, with the tail under [`TAIL_KEY`]
    pub fn params_map(&self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = self.params.iter().cloned().collect();
        if let Some(tail) = &self.tail {
            map.insert(TAIL_KEY.to_string(), tail.clone());
        }
        map
    }
}

/// Segment tree of registered routes.
///
/// Built once through [`add`](Self::add), then matched through
/// [`find`](Self::find). There is no removal.
#[derive(Debug)]
pub struct PathTree<T> {
    root: PathNode<T>,
    len: usize,
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self {
            root: PathNode::default(),
            len: 0,
        }
    }
}

impl<T> PathTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` for a route pattern.
    ///
    /// The whole pattern is validated before the tree is touched. A
    /// parameter conflict or duplicate route can still leave the positions
    /// created for earlier segments in place; they carry no route value.
    ///
    /// # Example
    /// ```
    /// use trellis_router::{PathTree, RouteError};
    ///
    /// let mut tree = PathTree::new();
    /// tree.add("user/#id", 1).unwrap();
    /// assert!(matches!(
    ///     tree.add("user/#uid/$action", 2),
    ///     Err(RouteError::ParamConflict { .. })
    /// ));
    /// ```
    pub fn add(&mut self, pattern: &str, value: T) -> Result<()> {
        let parsed = Pattern::parse(pattern)?;

        let mut node = &mut self.root;
        for segment in &parsed.segments {
            node = node.add_segment(*segment, pattern)?;
        }
        node.set_handler(value, parsed.tail_allowed, pattern)?;
        self.len += 1;

        debug!(
            pattern,
            segments = parsed.segments.len(),
            tail_allowed = parsed.tail_allowed,
            "route registered"
        );
        Ok(())
    }

    /// Match a request path (query string already removed).
    ///
    /// Walks one branch per segment, literal first, then index parameter,
    /// then string parameter, and never backtracks. The deepest position
    /// with a usable route wins; `None` means no route matched and the
    /// caller should fall back to its default.
    ///
    /// # Example
    /// ```
    /// use trellis_router::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// tree.add("files/*", "file").unwrap();
    ///
    /// let m = tree.find("/files/css/style.css").unwrap();
    /// assert_eq!(*m.value, "file");
    /// assert_eq!(m.tail(), Some("css/style.css"));
    /// ```
    pub fn find(&self, path: &str) -> Option<Match<'_, T>> {
        let segments = split_path(path);
        let mut captured: Vec<(&str, &str)> = Vec::new();

        // (value, segments consumed, params captured so far)
        let mut best = self
            .root
            .handler(!segments.is_empty())
            .map(|value| (value, 0, 0));

        let mut node = &self.root;
        for (i, &segment) in segments.iter().enumerate() {
            let Some((next, param)) = node.step(segment) else {
                break;
            };
            if let Some(name) = param {
                captured.push((name, segment));
            }

            node = next;
            let consumed = i + 1;
            if let Some(value) = node.handler(consumed < segments.len()) {
                best = Some((value, consumed, captured.len()));
            }
        }

        let (value, consumed, param_count) = best?;
        let params = captured[..param_count]
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        let tail = (consumed < segments.len()).then(|| segments[consumed..].join("/"));

        Some(Match {
            value,
            params,
            tail,
        })
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Patterns of all registered routes in canonical form
    /// (leading `/`, literals in key order, index before string parameters)
    pub fn patterns(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_patterns(&mut Vec::new(), &mut out);
        out
    }
}
