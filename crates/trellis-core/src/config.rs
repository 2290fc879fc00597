//! Declarative route tables
//!
//! A route table lists patterns and the names of the handlers serving
//! them:
//!
//! ```toml
//! [[route]]
//! pattern = "user/#uid"
//! handler = "profile"
//!
//! [[route]]
//! pattern = "user/#uid"
//! method = "POST"
//! handler = "update_profile"
//! ```
//!
//! Entries sharing a pattern are grouped. An entry without `method`
//! serves every method of its pattern that has no explicit entry; when a
//! pattern only has method entries, other methods get 405. Method names
//! in a table are case-insensitive and may name extension methods.

use crate::handler::{BoxedHandler, Handler, MethodNotAllowed};
use crate::method_router::MethodRouter;
use crate::router::PathRouter;
use crate::{Error, Method, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use trellis_router::{split_path, PathTree, RouteError};

/// One `[[route]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// Route pattern, e.g. `user/#uid/$action`
    pub pattern: String,
    /// Name of the handler in the [`HandlerRegistry`]
    pub handler: String,
    /// Restrict the entry to one HTTP method
    #[serde(default)]
    pub method: Option<String>,
}

/// A parsed route table, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteTable {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteEntry>,
}

/// All entries of one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// Pattern as first written in the table
    pub pattern: String,
    /// Handler for methods without their own entry
    pub fallback: Option<String>,
    /// Per-method handlers, in table order
    pub methods: Vec<(Method, String)>,
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .methods
            .iter()
            .map(|(method, handler)| format!("{method}={handler}"))
            .collect();
        if let Some(fallback) = &self.fallback {
            if parts.is_empty() {
                return f.write_str(fallback);
            }
            parts.push(format!("*={fallback}"));
        }
        f.write_str(&parts.join(" "))
    }
}

impl RouteTable {
    /// Parse a table from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Group entries by pattern, keeping first-appearance order
    pub fn groups(&self) -> Result<Vec<RouteGroup>> {
        let mut groups: Vec<RouteGroup> = Vec::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for entry in &self.routes {
            let key = split_path(&entry.pattern).join("/");
            let at = *by_key.entry(key).or_insert_with(|| {
                groups.push(RouteGroup {
                    pattern: entry.pattern.clone(),
                    fallback: None,
                    methods: Vec::new(),
                });
                groups.len() - 1
            });
            let group = &mut groups[at];

            match &entry.method {
                Some(method) => {
                    let method: Method = method.to_ascii_uppercase().parse()?;
                    if group.methods.iter().any(|(m, _)| *m == method) {
                        return Err(Error::MethodAlreadySet(method));
                    }
                    group.methods.push((method, entry.handler.clone()));
                }
                None if group.fallback.is_some() => {
                    return Err(RouteError::DuplicateHandler {
                        pattern: entry.pattern.clone(),
                    }
                    .into());
                }
                None => group.fallback = Some(entry.handler.clone()),
            }
        }

        Ok(groups)
    }

    /// Build a tree of route groups, for inspecting how paths resolve
    pub fn build_tree(&self) -> Result<PathTree<RouteGroup>> {
        let mut tree = PathTree::new();
        for group in self.groups()? {
            let pattern = group.pattern.clone();
            tree.add(&pattern, group)?;
        }
        Ok(tree)
    }

    /// Build a path router, resolving handler names through `registry`
    pub fn build_router(
        &self,
        registry: &HandlerRegistry,
        default: impl Handler + 'static,
    ) -> Result<PathRouter> {
        let mut router = PathRouter::new(default);

        for group in self.groups()? {
            let resolve = |name: &str| {
                registry.get(name).ok_or_else(|| Error::UnknownHandler {
                    pattern: group.pattern.clone(),
                    handler: name.to_string(),
                })
            };

            let fallback = group.fallback.as_deref().map(resolve).transpose()?;
            let handler = if group.methods.is_empty() {
                match fallback {
                    Some(handler) => handler,
                    None => continue,
                }
            } else {
                let mut methods = match fallback {
                    Some(handler) => MethodRouter::with_default(handler),
                    None => MethodRouter::new(MethodNotAllowed),
                };
                for (method, name) in &group.methods {
                    methods.add_boxed(method.clone(), resolve(name)?)?;
                }
                Arc::new(methods) as BoxedHandler
            };

            router.add_boxed(&group.pattern, handler)?;
        }

        info!(routes = router.len(), "route table loaded");
        Ok(router)
    }
}

/// Named handlers that route tables refer to
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, BoxedHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`, replacing any previous one
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Option<BoxedHandler> {
        self.handlers.get(name).cloned()
    }
}
