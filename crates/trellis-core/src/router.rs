//! Path router
//!
//! Wraps a [`PathTree`] of handlers with a default handler and copies the
//! captured parameters into the request before calling the matched handler.

use crate::handler::{BoxedHandler, Handler, NotFound};
use crate::{Request, Response, Result};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use trellis_router::{PathTree, TAIL_KEY};

/// Outcome of resolving a path: always a handler, possibly the default
pub struct RouteMatch<'a> {
    /// Handler to call
    pub handler: &'a dyn Handler,
    /// Captured parameters as (name, value) pairs, in path order
    pub params: Vec<(String, String)>,
    /// Unconsumed remainder of the path
    pub tail: Option<String>,
    /// False when no route matched and `handler` is the default
    pub matched: bool,
}

/// Routes requests by URL path.
///
/// Matching follows [`PathTree::find`]; requests no route accepts go to
/// the default handler. Build with `&mut self`, then share the router
/// (for example in an `Arc`) to serve.
pub struct PathRouter {
    tree: PathTree<BoxedHandler>,
    default: BoxedHandler,
}

impl PathRouter {
    /// Create a router falling back to `default`
    pub fn new(default: impl Handler + 'static) -> Self {
        Self {
            tree: PathTree::new(),
            default: Arc::new(default),
        }
    }

    /// Create a router falling back to 404 Not Found
    pub fn with_not_found() -> Self {
        Self::new(NotFound)
    }

    /// Add a handler for a route pattern
    pub fn add(&mut self, pattern: &str, handler: impl Handler + 'static) -> Result<()> {
        self.add_boxed(pattern, Arc::new(handler))
    }

    /// Add an already shared handler for a route pattern
    pub fn add_boxed(&mut self, pattern: &str, handler: BoxedHandler) -> Result<()> {
        self.tree.add(pattern, handler).map_err(|e| {
            warn!(pattern, error = %e, "route rejected");
            e.into()
        })
    }

    /// Resolve a path without calling anything
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        match self.tree.find(path) {
            Some(m) => RouteMatch {
                handler: m.value.as_ref(),
                params: m.params,
                tail: m.tail,
                matched: true,
            },
            None => RouteMatch {
                handler: self.default.as_ref(),
                params: Vec::new(),
                tail: None,
                matched: false,
            },
        }
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Patterns of all registered routes
    pub fn patterns(&self) -> Vec<String> {
        self.tree.patterns()
    }
}

impl Default for PathRouter {
    fn default() -> Self {
        Self::with_not_found()
    }
}

impl Handler for PathRouter {
    fn call(&self, mut req: Request) -> Response {
        let RouteMatch {
            handler,
            params,
            tail,
            matched,
        } = self.resolve(&req.path);

        if matched {
            trace!(
                path = %req.path,
                params = params.len(),
                tail = tail.is_some(),
                "route matched"
            );
        } else {
            debug!(path = %req.path, "no route matched, using default handler");
        }

        req.params.remove(TAIL_KEY);
        req.params.extend(params);
        if let Some(tail) = tail {
            req.params.insert(TAIL_KEY.to_string(), tail);
        }
        handler.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Method, StatusCode};
    use trellis_router::RouteError;

    fn named(name: &'static str) -> impl Handler {
        move |_req: Request| Response::text(name)
    }

    fn echo_params(req: Request) -> Response {
        let mut pairs: Vec<String> = req.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        pairs.sort();
        Response::text(pairs.join("&"))
    }

    fn body(router: &PathRouter, path: &str) -> String {
        router
            .call(Request::new(Method::Get, path))
            .body_string()
            .unwrap_or_default()
    }

    #[test]
    fn test_default_handler() {
        let router = PathRouter::default();
        let res = router.call(Request::new(Method::Get, "/missing"));
        assert_eq!(res.status, StatusCode::NOT_FOUND);

        let mut custom = PathRouter::new(named("fallback"));
        custom.add("/known", named("known")).unwrap();
        assert_eq!(body(&custom, "/known"), "known");
        assert_eq!(body(&custom, "/Known"), "fallback");
        assert!(!custom.resolve("/nope").matched);
    }

    #[test]
    fn test_params_injected() {
        let mut router = PathRouter::with_not_found();
        router.add("user/#uid", named("profile")).unwrap();
        router.add("user/#uid/$action", echo_params).unwrap();

        assert_eq!(body(&router, "/user/123"), "profile");
        assert_eq!(body(&router, "/user/123/message"), "action=message&uid=123");
    }

    #[test]
    fn test_tail_injected() {
        let mut router = PathRouter::with_not_found();
        router.add("files/*", echo_params).unwrap();
        router.add("files/config.js", named("config")).unwrap();

        assert_eq!(body(&router, "/files/css/style.css"), "*=css/style.css");
        assert_eq!(body(&router, "/files/config.js"), "config");
        // No tail left, nothing injected
        assert_eq!(body(&router, "/files"), "");
    }

    #[test]
    fn test_handler_reads_params() {
        let mut router = PathRouter::with_not_found();
        router
            .add("repo/$owner/*", |req: Request| {
                Response::text(format!(
                    "{}:{}",
                    req.param("owner").unwrap_or("-"),
                    req.tail().unwrap_or("-")
                ))
            })
            .unwrap();

        assert_eq!(body(&router, "/repo/alice/src/main.rs"), "alice:src/main.rs");
        assert_eq!(body(&router, "/repo/alice"), "alice:-");
    }

    #[test]
    fn test_nested_router_replaces_tail() {
        let mut inner = PathRouter::with_not_found();
        inner
            .add("app/$page", |req: Request| {
                Response::text(format!(
                    "{}:{}",
                    req.param("page").unwrap_or("-"),
                    req.tail().unwrap_or("-")
                ))
            })
            .unwrap();
        inner.add("app/static/*", echo_params).unwrap();

        let mut outer = PathRouter::with_not_found();
        outer.add("app/*", inner).unwrap();

        assert_eq!(body(&outer, "/app/home"), "home:-");
        assert_eq!(body(&outer, "/app/static/a.css"), "*=a.css");
    }

    #[test]
    fn test_registration_errors_surface() {
        let mut router = PathRouter::with_not_found();
        router.add("user/#id", named("a")).unwrap();

        let err = router.add("user/#uid/$action", named("b")).unwrap_err();
        assert!(matches!(err, Error::Route(RouteError::ParamConflict { .. })));

        let err = router.add("/user/#id/", named("c")).unwrap_err();
        assert!(matches!(err, Error::Route(RouteError::DuplicateHandler { .. })));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_resolve_no_backtracking() {
        let mut router = PathRouter::with_not_found();
        router.add("user/new", named("new")).unwrap();
        router.add("user/$action", named("action")).unwrap();

        let m = router.resolve("/user/new/extra");
        assert!(!m.matched);
        assert!(m.params.is_empty());
        assert_eq!(m.tail, None);
        assert_eq!(body(&router, "/user/new/extra"), "Not Found");
    }

    #[test]
    fn test_router_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathRouter>();
    }
}
