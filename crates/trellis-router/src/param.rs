//! Parameter branches of one tree position
//!
//! Branches are kept sorted by [`ParamKind`] priority with at most one
//! branch per kind. A kind is bound to a single name per position.

use crate::error::{Result, RouteError};
use crate::node::PathNode;
use crate::pattern::ParamKind;

#[derive(Debug)]
pub(crate) struct ParamBranch<T> {
    pub name: String,
    pub kind: ParamKind,
    pub child: PathNode<T>,
}

#[derive(Debug)]
pub(crate) struct ParamChain<T> {
    branches: Vec<ParamBranch<T>>,
}

impl<T> Default for ParamChain<T> {
    fn default() -> Self {
        Self {
            branches: Vec::new(),
        }
    }
}

impl<T> ParamChain<T> {
    /// Return the child for a `kind` parameter named `name`.
    ///
    /// Re-adding the same name is a no-op. A different name for a kind
    /// that is already present is a [`RouteError::ParamConflict`].
    pub fn add(&mut self, name: &str, kind: ParamKind, pattern: &str) -> Result<&mut PathNode<T>> {
        let at = self.branches.partition_point(|b| b.kind < kind);

        match self.branches.get(at) {
            Some(branch) if branch.kind == kind => {
                if branch.name != name {
                    return Err(RouteError::ParamConflict {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                        existing: branch.name.clone(),
                    });
                }
            }
            _ => self.branches.insert(
                at,
                ParamBranch {
                    name: name.to_string(),
                    kind,
                    child: PathNode::default(),
                },
            ),
        }

        Ok(&mut self.branches[at].child)
    }

    /// First branch, in priority order, that accepts `value`.
    ///
    /// A rejected index branch falls through to the string branch; the
    /// caller never comes back to try another one.
    pub fn find(&self, value: &str) -> Option<&ParamBranch<T>> {
        self.branches.iter().find(|b| b.kind.accepts(value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamBranch<T>> {
        self.branches.iter()
    }
}
