//! trellis-router: segment tree HTTP path router
//!
//! Matches request paths segment by segment against registered route
//! patterns. Shared by trellis-core and the `trellis-routes` tool.
//!
//! ## Path Syntax
//! - `user/list` - literal segments, case-sensitive
//! - `#name` - index parameter, captures a positive integer segment
//! - `$name` - string parameter, captures any non-empty segment
//! - `*` - as the last segment, allows and captures a trailing remainder
//!
//! Leading and trailing `/` are ignored, so `foo`, `/foo`, `foo/` and
//! `/foo/` are the same route.
//!
//! ## Priority
//! 1. Literal match (highest)
//! 2. Index parameter
//! 3. String parameter (lowest)
//!
//! One branch is chosen per segment and never revisited. The deepest
//! position on that walk holding a route wins, so with `user/profile` and
//! `user/$action/#id` registered, `/user/profile/123` matches nothing.
//!
//! ## Example
//! ```
//! use trellis_router::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.add("/user/#uid", "profile").unwrap();
//! tree.add("/user/#uid/$action", "id-action").unwrap();
//!
//! let m = tree.find("/user/123/message").unwrap();
//! assert_eq!(*m.value, "id-action");
//! assert_eq!(m.param("uid"), Some("123"));
//! assert_eq!(m.param("action"), Some("message"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod pattern;

mod index;
mod node;
mod param;
mod tree;

pub use error::{Result, RouteError};
pub use pattern::{split_path, InvalidSegment, ParamKind, Pattern, Segment, TAIL_KEY};
pub use tree::{Match, PathTree};
