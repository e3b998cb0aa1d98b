//! Internal node implementation for the trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Each node exclusively owns its children through `Box`, so the tree has
//! no sharing, no back-references and no cycles.
//!
//! A single key can make the tree arbitrarily deep, so nothing here recurses
//! per level: dropping, cloning, comparing and counting all walk the tree with
//! an explicit work-list.

use std::fmt;

use crate::key::{index_char, ALPHABET_SIZE};

/// One position in the key space.
///
/// The path of slot indices from the root to a node spells the prefix that
/// node represents.
#[derive(Default)]
pub struct TrieNode {
    /// Child nodes indexed by `character - 'a'`
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// True iff a stored key ends exactly at this node
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new node with no children that is not terminal.
    pub fn new() -> Self {
        TrieNode::default()
    }

    fn with_terminal(is_terminal: bool) -> Self {
        let mut node = TrieNode::default();
        node.is_terminal = is_terminal;
        node
    }

    /// Returns whether some stored key ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child in slot `index`, if any. Out-of-range slots have no child.
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children.get(index).and_then(|child| child.as_deref())
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut TrieNode> {
        self.children
            .get_mut(index)
            .and_then(|child| child.as_deref_mut())
    }

    /// Returns the child in slot `index`, creating an empty one first if the slot is vacant.
    pub(crate) fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Default::default)
    }

    /// Unlinks and returns the child in slot `index`.
    pub(crate) fn take_child(&mut self, index: usize) -> Option<Box<TrieNode>> {
        self.children[index].take()
    }

    /// Iterates over occupied slots in ascending slot order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (usize, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|child| (index, child)))
    }

    /// Returns whether this node is a leaf (has no children)
    pub fn has_no_children(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }

    /// Returns the number of nodes in this subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        self.descendants().count()
    }

    /// Returns the number of terminal nodes in this subtree, this node included.
    pub fn terminal_count(&self) -> usize {
        self.descendants().filter(|node| node.is_terminal).count()
    }

    /// Whether this node must survive unlinking one of its children: it ends
    /// a key itself or still branches toward another one.
    pub(crate) fn holds_other_keys(&self) -> bool {
        self.is_terminal || self.child_count() > 1
    }

    // Every node of the subtree, this one first, in no particular order.
    fn descendants(&self) -> impl Iterator<Item = &TrieNode> {
        let mut pending = vec![self];

        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children().map(|(_, child)| child));
            Some(node)
        })
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach the whole subtree first so each box is dropped childless.
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut root = TrieNode::with_terminal(self.is_terminal);

        {
            let mut pending: Vec<(&TrieNode, &mut TrieNode)> = vec![(self, &mut root)];

            while let Some((source, target)) = pending.pop() {
                for (slot, child) in target.children.iter_mut().zip(source.children.iter()) {
                    if let Some(child) = child.as_deref() {
                        let copy = slot.insert(Box::new(TrieNode::with_terminal(child.is_terminal)));
                        pending.push((child, &mut **copy));
                    }
                }
            }
        }

        root
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((mine, theirs)) = pending.pop() {
            if mine.is_terminal != theirs.is_terminal {
                return false;
            }

            for (left, right) in mine.children.iter().zip(theirs.children.iter()) {
                match (left.as_deref(), right.as_deref()) {
                    (None, None) => {}
                    (Some(left), Some(right)) => pending.push((left, right)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for TrieNode {}

// Only this level: printing the whole subtree would recurse per level.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: String = self.children().map(|(index, _)| index_char(index)).collect();

        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &slots)
            .field("subtree_size", &self.subtree_size())
            .finish()
    }
}
