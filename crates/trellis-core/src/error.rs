//! Error types for trellis-core

use crate::Method;
use thiserror::Error;
use trellis_router::RouteError;

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the trellis dispatch layer.
///
/// All of these surface while routers are being built; dispatching a
/// request never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid HTTP method
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Route pattern rejected by the path tree
    #[error("Invalid route: {0}")]
    Route(#[from] RouteError),

    /// A handler is already registered for this method
    #[error("Handler already set for method {0}")]
    MethodAlreadySet(Method),

    /// Route table names a handler that was never registered
    #[error("Unknown handler {handler:?} for route {pattern:?}")]
    UnknownHandler { pattern: String, handler: String },

    /// Route table could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP conversion error
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),
}
