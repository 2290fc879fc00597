//! Route registration errors

use thiserror::Error;

/// Result type alias for route registration
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised while registering a route pattern.
///
/// Matching never fails, so every variant here is a registration-time error.
/// Each variant carries the offending pattern as it was passed to
/// [`PathTree::add`](crate::PathTree::add).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A segment between two slashes is empty (`a//b`)
    #[error("empty path component in {pattern:?}")]
    EmptySegment { pattern: String },

    /// `*` used anywhere but as the whole final segment
    #[error("incorrect path component in {pattern:?}")]
    MisplacedTail { pattern: String },

    /// `$` or `#` without a name
    #[error("empty parameter name in {pattern:?}")]
    EmptyParamName { pattern: String },

    /// A parameter of the same kind is already bound to another name at this position
    #[error("cannot add {name:?} parameter: {existing:?} is already used (in {pattern:?})")]
    ParamConflict {
        pattern: String,
        name: String,
        existing: String,
    },

    /// A route already ends at this position
    #[error("handler already set for {pattern:?}")]
    DuplicateHandler { pattern: String },
}

impl RouteError {
    /// The pattern whose registration failed
    pub fn pattern(&self) -> &str {
        match self {
            RouteError::EmptySegment { pattern }
            | RouteError::MisplacedTail { pattern }
            | RouteError::EmptyParamName { pattern }
            | RouteError::ParamConflict { pattern, .. }
            | RouteError::DuplicateHandler { pattern } => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_params() {
        let err = RouteError::ParamConflict {
            pattern: "user/#uid/$action".to_string(),
            name: "uid".to_string(),
            existing: "id".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"uid\""));
        assert!(msg.contains("\"id\" is already used"));
        assert_eq!(err.pattern(), "user/#uid/$action");
    }
}
