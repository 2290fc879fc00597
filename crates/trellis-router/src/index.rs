//! Literal segment index
//!
//! An unbalanced binary search tree keyed by exact segment text. Literal
//! fan-out at one position is usually small, so insertion order decides
//! the shape and no rebalancing is done.

use crate::node::PathNode;
use std::cmp::Ordering;

type Link<T> = Option<Box<Entry<T>>>;

#[derive(Debug)]
struct Entry<T> {
    key: String,
    child: PathNode<T>,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Entry<T> {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            child: PathNode::default(),
            left: None,
            right: None,
        }
    }
}

/// Exact-text children of one tree position
#[derive(Debug)]
pub(crate) struct LiteralIndex<T> {
    root: Link<T>,
}

impl<T> Default for LiteralIndex<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> LiteralIndex<T> {
    /// Return the child for `key`, creating it if absent
    pub fn add(&mut self, key: &str) -> &mut PathNode<T> {
        insert(&mut self.root, key)
    }

    /// Exact lookup
    pub fn get(&self, key: &str) -> Option<&PathNode<T>> {
        let mut link = self.root.as_deref();
        while let Some(entry) = link {
            link = match key.cmp(entry.key.as_str()) {
                Ordering::Equal => return Some(&entry.child),
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
            };
        }
        None
    }

    /// Entries in key order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: Vec::new(),
            current: self.root.as_deref(),
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        fn walk<T>(link: &Link<T>) -> usize {
            match link {
                Some(entry) => 1 + walk(&entry.left).max(walk(&entry.right)),
                None => 0,
            }
        }
        walk(&self.root)
    }
}

fn insert<'a, T>(link: &'a mut Link<T>, key: &str) -> &'a mut PathNode<T> {
    match link {
        Some(entry) => match key.cmp(entry.key.as_str()) {
            Ordering::Equal => &mut entry.child,
            Ordering::Less => insert(&mut entry.left, key),
            Ordering::Greater => insert(&mut entry.right, key),
        },
        None => &mut link.insert(Box::new(Entry::new(key))).child,
    }
}

/// In-order iterator over `(key, child)` pairs
pub(crate) struct Iter<'a, T> {
    stack: Vec<&'a Entry<T>>,
    current: Option<&'a Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a PathNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.current {
            self.stack.push(entry);
            self.current = entry.left.as_deref();
        }
        let entry = self.stack.pop()?;
        self.current = entry.right.as_deref();
        Some((entry.key.as_str(), &entry.child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut index: LiteralIndex<u32> = LiteralIndex::default();
        assert_eq!(index.iter().count(), 0);

        index.add("users").set_handler(1, false, "users").unwrap();
        // Same key hands back the same child, which already has a handler
        assert!(index.add("users").set_handler(2, false, "users").is_err());
        assert_eq!(index.iter().count(), 1);
    }

    #[test]
    fn test_get_exact_only() {
        let mut index: LiteralIndex<u32> = LiteralIndex::default();
        for key in ["m", "c", "x", "a", "e"] {
            index.add(key);
        }

        assert!(index.get("c").is_some());
        assert!(index.get("e").is_some());
        assert!(index.get("C").is_none());
        assert!(index.get("b").is_none());
        assert!(index.get("").is_none());
    }

    #[test]
    fn test_iter_sorted() {
        let mut index: LiteralIndex<u32> = LiteralIndex::default();
        for key in ["m", "c", "x", "a", "e", "z"] {
            index.add(key);
        }

        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c", "e", "m", "x", "z"]);
    }

    #[test]
    fn test_shape_follows_insertion_order() {
        let mut sorted: LiteralIndex<u32> = LiteralIndex::default();
        for key in ["a", "b", "c", "d"] {
            sorted.add(key);
        }
        assert_eq!(sorted.depth(), 4);

        let mut mixed: LiteralIndex<u32> = LiteralIndex::default();
        for key in ["b", "a", "c", "d"] {
            mixed.add(key);
        }
        assert_eq!(mixed.depth(), 3);
        assert!(mixed.get("d").is_some());
    }
}
