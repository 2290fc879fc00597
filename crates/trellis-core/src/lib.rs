//! trellis-core: HTTP dispatch over the trellis path tree
//!
//! Turns a [`trellis_router::PathTree`] into request routing:
//! - [`PathRouter`] - routes by URL path, copies captured parameters and
//!   the tail into [`Request::params`], falls back to a default handler
//! - [`MethodRouter`] - routes by HTTP method, HEAD falls back to GET
//! - [`RouteTable`] - declarative routes loaded from TOML
//!
//! ## Example
//! ```
//! use trellis_core::{Handler, Method, MethodRouter, PathRouter, Request, Response};
//!
//! let mut user = MethodRouter::default();
//! user.get(|req: Request| Response::text(format!("user {}", req.param("uid").unwrap_or("?"))))
//!     .unwrap();
//!
//! let mut router = PathRouter::with_not_found();
//! router.add("/user/#uid", user).unwrap();
//!
//! let res = router.call(Request::new(Method::Get, "/user/42"));
//! assert_eq!(res.body_string().as_deref(), Some("user 42"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handler;
pub mod method_router;
pub mod request;
pub mod response;
pub mod router;

// Re-exports
pub use config::{HandlerRegistry, RouteEntry, RouteGroup, RouteTable};
pub use error::{Error, Result};
pub use handler::{BoxedHandler, Handler, MethodNotAllowed, NotFound};
pub use method_router::MethodRouter;
pub use request::{Method, Request, RequestBuilder};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use router::{PathRouter, RouteMatch};

pub use trellis_router::{RouteError, TAIL_KEY};
