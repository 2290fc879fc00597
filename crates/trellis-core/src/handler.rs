//! Request handlers

use crate::{Request, Response};
use std::sync::Arc;

/// Handles one request.
///
/// Routers are handlers too, so a [`MethodRouter`](crate::MethodRouter)
/// can be registered on a [`PathRouter`](crate::PathRouter) path and
/// the other way around.
pub trait Handler: Send + Sync {
    fn call(&self, req: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync,
{
    fn call(&self, req: Request) -> Response {
        self(req)
    }
}

/// Shared handler
pub type BoxedHandler = Arc<dyn Handler>;

/// Default handler: 404 Not Found
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl Handler for NotFound {
    fn call(&self, _req: Request) -> Response {
        Response::not_found()
    }
}

/// 405 Method Not Allowed, used when a path exists but not for the method
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodNotAllowed;

impl Handler for MethodNotAllowed {
    fn call(&self, _req: Request) -> Response {
        Response::method_not_allowed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, StatusCode};

    #[test]
    fn test_closure_handler() {
        let handler = |req: Request| Response::text(req.path);
        let res = Handler::call(&handler, Request::new(Method::Get, "/hello"));
        assert_eq!(res.body_string().as_deref(), Some("/hello"));
    }

    #[test]
    fn test_fallbacks() {
        let boxed: BoxedHandler = Arc::new(NotFound);
        assert_eq!(boxed.call(Request::new(Method::Get, "/")).status, StatusCode::NOT_FOUND);
        assert_eq!(
            MethodNotAllowed.call(Request::new(Method::Get, "/")).status,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
