//! One position in the path tree

use crate::error::{Result, RouteError};
use crate::index::LiteralIndex;
use crate::param::ParamChain;
use crate::pattern::{Segment, TAIL_KEY};

/// A tree position: literal children, parameter children and an optional
/// route value ending here.
#[derive(Debug)]
pub(crate) struct PathNode<T> {
    literals: LiteralIndex<T>,
    params: ParamChain<T>,
    handler: Option<T>,
    /// Only meaningful when `handler` is set
    tail_allowed: bool,
}

impl<T> Default for PathNode<T> {
    fn default() -> Self {
        Self {
            literals: LiteralIndex::default(),
            params: ParamChain::default(),
            handler: None,
            tail_allowed: false,
        }
    }
}

impl<T> PathNode<T> {
    /// Advance (creating if needed) to the child for a pattern segment
    pub fn add_segment(&mut self, segment: Segment<'_>, pattern: &str) -> Result<&mut PathNode<T>> {
        match segment {
            Segment::Literal(key) => Ok(self.literals.add(key)),
            Segment::Param { name, kind } => self.params.add(name, kind, pattern),
        }
    }

    /// Attach a route value; a position holds at most one
    pub fn set_handler(&mut self, value: T, tail_allowed: bool, pattern: &str) -> Result<()> {
        if self.handler.is_some() {
            return Err(RouteError::DuplicateHandler {
                pattern: pattern.to_string(),
            });
        }
        self.handler = Some(value);
        self.tail_allowed = tail_allowed;
        Ok(())
    }

    /// Child for one request segment, with the parameter name if a
    /// parameter branch captured it. Literals win over parameters.
    pub fn step(&self, segment: &str) -> Option<(&PathNode<T>, Option<&str>)> {
        if let Some(child) = self.literals.get(segment) {
            return Some((child, None));
        }
        self.params
            .find(segment)
            .map(|branch| (&branch.child, Some(branch.name.as_str())))
    }

    /// The route value, if it can serve a request that has `has_tail`
    /// segments left after this position
    pub fn handler(&self, has_tail: bool) -> Option<&T> {
        if has_tail && !self.tail_allowed {
            None
        } else {
            self.handler.as_ref()
        }
    }

    /// Append the pattern of every route at or below this position
    pub fn collect_patterns(&self, prefix: &mut Vec<String>, out: &mut Vec<String>) {
        if self.handler.is_some() {
            let mut pattern = format!("/{}", prefix.join("/"));
            if self.tail_allowed {
                if !prefix.is_empty() {
                    pattern.push('/');
                }
                pattern.push_str(TAIL_KEY);
            }
            out.push(pattern);
        }

        for (key, child) in self.literals.iter() {
            prefix.push(key.to_string());
            child.collect_patterns(prefix, out);
            prefix.pop();
        }

        for branch in self.params.iter() {
            prefix.push(format!("{}{}", branch.kind.prefix(), branch.name));
            branch.child.collect_patterns(prefix, out);
            prefix.pop();
        }
    }
}
