//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the prefix tree: insertion, exact and prefix lookup, and removal with
//! eager pruning of branches that no longer lead to a stored key.

use log::{debug, trace};

use crate::config::{EmptyKeyRemoval, TrieConfig};
use crate::key::{char_index, index_char, key_indices, lookup_indices};
use crate::node::TrieNode;
use crate::prefix_view::{PrefixIter, PrefixView};
use crate::Result;

/// A mutable prefix tree over lowercase ASCII keys.
///
/// The tree never keeps a node that is neither terminal nor on the way to a
/// terminal node: `remove` unlinks such nodes bottom-up as soon as they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// The root node of the trie, representing the empty prefix
    pub(crate) root: TrieNode,

    /// The number of keys stored in the trie
    size: usize,

    config: TrieConfig,
}

/// Where a removal cuts the tree, worked out before anything is modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// The key is not stored. Nothing changes.
    Absent,
    /// The key's node still leads to other keys; only its terminal flag goes.
    Unmark,
    /// The node at `depth` along the key is the deepest one still needed by
    /// another key. The branch hanging from its slot `key[depth]` existed
    /// only for this key and is unlinked whole.
    Prune { depth: usize },
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie::default()
    }

    /// Creates a new, empty trie with the given options.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
            config,
        }
    }

    /// Builds a trie holding every key in `keys`.
    ///
    /// Fails on the first key containing a character outside `'a'..='z'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let trie = Trie::from_keys(vec!["cat", "cut"]).unwrap();
    /// assert_eq!(trie.len(), 2);
    /// assert!(Trie::from_keys(vec!["cat", "Cut"]).is_err());
    /// ```
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for key in keys {
            trie.insert(key.as_ref())?;
        }
        Ok(trie)
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello").unwrap();
    /// trie.insert("hello").unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the tree, the root included.
    ///
    /// An empty trie has exactly one node.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every key. Keeps the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Inserts `key`, creating any missing nodes along its path.
    ///
    /// Inserting a key that is already present changes nothing. The empty key
    /// is valid and marks the root.
    ///
    /// The whole key is validated before the tree is touched, so a failed
    /// insert leaves the trie exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("geek").unwrap();
    ///
    /// assert_eq!(
    ///     trie.insert("geek!"),
    ///     Err(Error::InvalidCharacter { character: '!', position: 4 })
    /// );
    /// ```
    pub fn insert(&mut self, key: &str) -> Result<()> {
        let indices = key_indices(key)?;

        let mut current = &mut self.root;
        for &index in &indices {
            current = current.child_or_insert(index as usize);
        }

        if !current.is_terminal {
            current.is_terminal = true;
            self.size += 1;
            debug!("inserted key {:?}", key);
        }

        Ok(())
    }

    /// Returns `true` if `key` was inserted and has not been removed since.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let trie = Trie::from_keys(vec!["geeks"]).unwrap();
    ///
    /// assert!(trie.search("geeks"));
    /// assert!(!trie.search("geek"));
    /// ```
    pub fn search(&self, key: &str) -> bool {
        self.find_node(key).map_or(false, TrieNode::is_terminal)
    }

    /// Returns `true` if some stored key starts with `prefix`.
    ///
    /// Every prefix of a stored key qualifies, the key itself included. The
    /// empty prefix always qualifies because the root always exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let trie = Trie::from_keys(vec!["geeks"]).unwrap();
    ///
    /// assert!(trie.prefix_search("gee"));
    /// assert!(trie.prefix_search("geeks"));
    /// assert!(!trie.prefix_search("geeksf"));
    /// ```
    pub fn prefix_search(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Removes `key` and unlinks every node that existed only to hold it.
    ///
    /// Removing a key that is not stored is a silent no-op. So is removing the
    /// empty key, unless the trie was built with [`EmptyKeyRemoval::Unmark`].
    /// Returns whether a stored key was actually removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let mut trie = Trie::from_keys(vec!["bad", "bat"]).unwrap();
    ///
    /// assert!(trie.remove("bad"));
    /// assert!(!trie.prefix_search("bad"));
    /// assert!(trie.search("bat"));
    ///
    /// assert!(!trie.remove("bad"));
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        if key.is_empty() && self.config.empty_key_removal == EmptyKeyRemoval::Ignore {
            debug!("ignoring removal of the empty key");
            return false;
        }

        let indices = match lookup_indices(key) {
            Some(indices) => indices,
            None => return false,
        };

        let removed = match self.plan_removal(&indices) {
            Removal::Absent => false,
            Removal::Unmark => match self.node_at_mut(&indices) {
                Some(node) => {
                    node.is_terminal = false;
                    true
                }
                None => false,
            },
            Removal::Prune { depth } => match self.node_at_mut(&indices[..depth]) {
                Some(node) => {
                    let index = indices[depth] as usize;
                    node.take_child(index);
                    trace!(
                        "pruned {} nodes below depth {} from slot {:?}",
                        indices.len() - depth,
                        depth,
                        index_char(index)
                    );
                    true
                }
                None => false,
            },
        };

        if removed {
            self.size -= 1;
            debug!("removed key {:?}", key);
        }

        removed
    }

    // Walks down `key` once, read-only. Unwinding the removal bottom-up, a node
    // is unlinked when it ends no other key and has no other child, so the cut
    // lands just below the deepest node on the path that holds other keys. The
    // root is never unlinked.
    fn plan_removal(&self, key: &[u8]) -> Removal {
        let mut current = &self.root;
        let mut keep_depth = 0;

        for (depth, &index) in key.iter().enumerate() {
            if current.holds_other_keys() {
                keep_depth = depth;
            }

            current = match current.child(index as usize) {
                Some(child) => child,
                None => return Removal::Absent,
            };
        }

        if !current.is_terminal {
            Removal::Absent
        } else if key.is_empty() || !current.has_no_children() {
            Removal::Unmark
        } else {
            Removal::Prune { depth: keep_depth }
        }
    }

    fn node_at_mut(&mut self, path: &[u8]) -> Option<&mut TrieNode> {
        let mut current = &mut self.root;

        for &index in path {
            current = current.child_mut(index as usize)?;
        }

        Some(current)
    }

    /// Creates a view of the keys starting with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_trie::Trie;
    ///
    /// let trie = Trie::from_keys(vec!["cat", "cut", "zoo"]).unwrap();
    /// let view = trie.view_prefix("c");
    ///
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(view.iter().collect::<Vec<_>>(), vec!["cat", "cut"]);
    /// ```
    pub fn view_prefix(&self, prefix: &str) -> PrefixView<'_> {
        PrefixView::new(self, prefix)
    }

    /// Returns every stored key in lexicographic order.
    pub fn keys(&self) -> PrefixIter<'_> {
        self.view_prefix("").iter()
    }

    /// Walks from the root along `key`. Keys with characters outside the
    /// alphabet are never stored, so they simply have no node.
    pub(crate) fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut current = &self.root;

        for (position, c) in key.chars().enumerate() {
            let index = char_index(c, position).ok()?;
            current = current.child(index)?;
        }

        Some(current)
    }
}
