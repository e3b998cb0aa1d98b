//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which gives read-only access to
//! the subtrie below a key prefix: whether it exists, how many keys it holds,
//! and those keys in lexicographic order.

use std::fmt;

use crate::key::index_char;
use crate::node::TrieNode;
use crate::Trie;

/// A lightweight view into the subtrie defined by a key prefix.
///
/// # Examples
///
/// ```
/// use alpha_trie::Trie;
///
/// let trie = Trie::from_keys(vec!["geek", "geeks", "zoo"]).unwrap();
/// let view = trie.view_prefix("gee");
///
/// assert!(view.exists());
/// assert!(view.contains_key("geeks"));
/// assert!(!view.contains_key("zoo"));
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The source trie for this view
    trie: &'a Trie,

    /// The key prefix defining this view
    prefix: String,

    /// The node at the end of the prefix, if the prefix is a path in the trie
    subtrie_node: Option<&'a TrieNode>,
}

/// An iterator over the keys of a `PrefixView`.
///
/// This iterator performs a depth-first traversal with an explicit stack, so
/// it yields keys in lexicographic order without recursing.
pub struct PrefixIter<'a> {
    /// Nodes still to visit: the node, the slot it hangs from (none for the
    /// view's own node) and the length of its parent's key
    stack: Vec<(&'a TrieNode, Option<usize>, usize)>,

    /// Key of the node visited last
    path: String,
}

impl<'a> PrefixView<'a> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie, prefix: &str) -> Self {
        PrefixView {
            trie,
            prefix: prefix.to_string(),
            subtrie_node: trie.find_node(prefix),
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// Returns whether the prefix is a path in the trie.
    ///
    /// Agrees with [`Trie::prefix_search`].
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of stored keys starting with the prefix.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::terminal_count)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a key.
    ///
    /// Only returns true if the key starts with the prefix and is stored in the trie.
    pub fn contains_key(&self, key: &str) -> bool {
        key.starts_with(self.prefix.as_str()) && self.trie.search(key)
    }

    /// Returns an iterator over the keys in the view, in lexicographic order.
    pub fn iter(&self) -> PrefixIter<'a> {
        let mut stack = Vec::new();

        if let Some(node) = self.subtrie_node {
            stack.push((node, None, self.prefix.len()));
        }

        PrefixIter {
            stack,
            path: self.prefix.clone(),
        }
    }
}

impl<'a> fmt::Debug for PrefixView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .finish()
    }
}

// Two views are equal when they hold the same keys below their prefixes.
impl<'a, 'b> PartialEq<PrefixView<'b>> for PrefixView<'a> {
    fn eq(&self, other: &PrefixView<'b>) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

impl<'a> Eq for PrefixView<'a> {}

impl<'a, 'v> IntoIterator for &'v PrefixView<'a> {
    type Item = String;
    type IntoIter = PrefixIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for PrefixIter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, slot, parent_len)) = self.stack.pop() {
            // Keys are ASCII, so byte length is character count
            self.path.truncate(parent_len);
            if let Some(index) = slot {
                self.path.push(index_char(index));
            }

            // Reverse order so the smallest slot is popped first
            let len = self.path.len();
            for (index, child) in node.children().rev() {
                self.stack.push((child, Some(index), len));
            }

            if node.is_terminal() {
                return Some(self.path.clone());
            }
        }

        None
    }
}
