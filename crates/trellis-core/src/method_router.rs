//! Method router
//!
//! Few methods are ever registered on one path, so handlers live in a
//! small inline list and lookup is a linear scan.

use crate::handler::{BoxedHandler, Handler, NotFound};
use crate::{Error, Method, Request, Response, Result};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::trace;

/// Routes requests by HTTP method.
///
/// HEAD falls back to the GET handler when no HEAD handler is set; any
/// other unregistered method goes to the default handler.
pub struct MethodRouter {
    handlers: SmallVec<[(Method, BoxedHandler); 4]>,
    default: BoxedHandler,
}

impl MethodRouter {
    /// Create a router falling back to `default`
    pub fn new(default: impl Handler + 'static) -> Self {
        Self::with_default(Arc::new(default))
    }

    /// Create a router falling back to an already shared handler
    pub fn with_default(default: BoxedHandler) -> Self {
        Self {
            handlers: SmallVec::new(),
            default,
        }
    }

    /// Add a handler for a method; each method can be set once
    pub fn add(&mut self, method: Method, handler: impl Handler + 'static) -> Result<()> {
        self.add_boxed(method, Arc::new(handler))
    }

    /// Add an already shared handler for a method
    pub fn add_boxed(&mut self, method: Method, handler: BoxedHandler) -> Result<()> {
        if self.find(&method).is_some() {
            return Err(Error::MethodAlreadySet(method));
        }
        self.handlers.push((method, handler));
        Ok(())
    }

    /// Add a GET handler
    pub fn get(&mut self, handler: impl Handler + 'static) -> Result<()> {
        self.add(Method::Get, handler)
    }

    /// Add a POST handler
    pub fn post(&mut self, handler: impl Handler + 'static) -> Result<()> {
        self.add(Method::Post, handler)
    }

    fn find(&self, method: &Method) -> Option<&BoxedHandler> {
        self.handlers
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, h)| h)
    }

    /// Handler that serves `method`
    pub fn dispatch(&self, method: &Method) -> &dyn Handler {
        let found = self.find(method).or_else(|| {
            if *method == Method::Head {
                trace!("no HEAD handler, falling back to GET");
                self.find(&Method::Get)
            } else {
                None
            }
        });
        found.unwrap_or(&self.default).as_ref()
    }

    /// Registered methods, in registration order
    pub fn methods(&self) -> Vec<Method> {
        self.handlers.iter().map(|(m, _)| m.clone()).collect()
    }
}

impl Default for MethodRouter {
    fn default() -> Self {
        Self::new(NotFound)
    }
}

impl Handler for MethodRouter {
    fn call(&self, req: Request) -> Response {
        self.dispatch(&req.method).call(req)
    }
}
