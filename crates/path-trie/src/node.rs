//! Trie nodes
//!
//! Each node owns its outgoing edges as an ordered `(SegmentOption, Node)`
//! list. Edge order is the order options were first attached, and lookup
//! tries edges in exactly that order, so definition order is match
//! precedence.

use std::fmt;

use crate::route::SegmentOption;

/// One point in the routing trie
///
/// Nodes are created lazily by [`Router::define`](crate::Router::define) and
/// never removed. There is no parent link; the trie is inspected top-down
/// through [`children`](Self::children).
#[derive(Debug, Clone)]
pub struct Node<T> {
    payload: Option<T>,
    children: Vec<(SegmentOption, Node<T>)>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            payload: None,
            children: Vec::new(),
        }
    }
}

impl<T> Node<T> {
    /// Creates an empty node with no payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload of the pattern that terminates here, if any
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Outgoing edges in attachment order
    pub fn children(&self) -> impl Iterator<Item = (&SegmentOption, &Node<T>)> {
        self.children.iter().map(|(option, child)| (option, child))
    }

    /// Child reached through the edge equal to `option`
    pub fn child(&self, option: &SegmentOption) -> Option<&Node<T>> {
        self.children
            .iter()
            .find(|(edge, _)| edge == option)
            .map(|(_, child)| child)
    }

    /// Number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    /// Finds the edge keyed by `option`, appending a fresh one if absent
    fn child_or_insert(&mut self, option: &SegmentOption) -> &mut Node<T> {
        let index = match self.children.iter().position(|(edge, _)| edge == option) {
            Some(index) => index,
            None => {
                self.children.push((option.clone(), Node::new()));
                self.children.len() - 1
            }
        };

        &mut self.children[index].1
    }

    /// Grows the subtree along `levels`, one option list per path level
    ///
    /// Every alternation branch fans out into its own child, and `payload` is
    /// stored on every node reached after the last level, replacing any
    /// earlier payload there. Returns the number of terminal nodes written.
    pub(crate) fn insert(&mut self, levels: &[Vec<SegmentOption>], payload: &T) -> usize
    where
        T: Clone,
    {
        match levels.split_first() {
            None => {
                self.payload = Some(payload.clone());
                1
            }
            Some((options, rest)) => options
                .iter()
                .map(|option| self.child_or_insert(option).insert(rest, payload))
                .sum(),
        }
    }

    /// Depth-first, first-fit lookup with backtracking
    ///
    /// Consumes one segment per level. Named edges push `(name, segment)`
    /// onto `captures`; a branch that fails deeper down truncates its
    /// captures before the next sibling is tried. A node reached with no
    /// segments left only counts as a match if it carries a payload.
    pub(crate) fn descend<'a, 'p>(
        &'a self,
        segments: &[&'p str],
        captures: &mut Vec<(&'a str, &'p str)>,
    ) -> Option<&'a T> {
        let Some((&segment, rest)) = segments.split_first() else {
            return self.payload.as_ref();
        };

        self.children.iter().find_map(|(option, child)| {
            if !option.matches(segment) {
                return None;
            }

            let mark = captures.len();
            if let Some(name) = &option.name {
                captures.push((name.as_str(), segment));
            }

            let found = child.descend(rest, captures);
            if found.is_none() {
                captures.truncate(mark);
            }
            found
        })
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for (option, child) in &self.children {
            let marker = if child.payload.is_some() { " *" } else { "" };
            writeln!(f, "{:indent$}/{}{}", "", option, marker, indent = depth * 2)?;
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented edge listing; `*` marks nodes that carry a payload
impl<T> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
