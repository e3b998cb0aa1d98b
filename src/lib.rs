//! # Alpha Trie
//!
//! A prefix tree over lowercase ASCII keys that prunes dead branches on removal.
//!
//! Each node has one child slot per letter `'a'..='z'` and a flag marking
//! whether a stored key ends there. Removing a key clears that flag and then
//! unlinks, bottom-up, every node that no longer leads to any stored key.
//! Nodes that end another key, or that branch toward one, are left alone.
//!
//! ## Features
//!
//! - **Exact and prefix lookup**: `search` and `prefix_search` walk one node per character
//! - **Eager pruning**: the tree never holds a non-terminal leaf after `remove` returns
//! - **Validated keys**: `insert` rejects characters outside the alphabet before touching the tree
//! - **Prefix Views**: borrow the subtrie below a prefix to count or list its keys
//!
//! ## Example
//!
//! ```rust
//! use alpha_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("bad").unwrap();
//! trie.insert("bat").unwrap();
//!
//! trie.remove("bad");
//!
//! assert!(!trie.search("bad"));
//! assert!(!trie.prefix_search("bad"));
//! assert!(trie.search("bat"));
//! ```
//!
//! The crate logs through the [`log`] facade: `debug` for keys inserted and
//! removed, `trace` for each pruned node.

pub mod config;
pub mod key;
pub mod node;
mod prefix_view;
mod trie;

// Re-export public types
pub use crate::config::{EmptyKeyRemoval, TrieConfig};
pub use crate::node::TrieNode;
pub use crate::prefix_view::{PrefixIter, PrefixView};
pub use crate::trie::Trie;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key contains a character with no child slot
    #[error("invalid character {character:?} at position {position}: keys may only contain 'a'..='z'")]
    InvalidCharacter { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
