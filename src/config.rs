//! Behavioural switches for a [`Trie`](crate::Trie).

/// What `remove("")` does.
///
/// Insertion and search both accept the empty key (it lives on the root node),
/// but removal historically refuses it. Both behaviours are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKeyRemoval {
    /// `remove("")` is a silent no-op, even when `""` is stored.
    Ignore,
    /// `remove("")` clears the root's terminal flag. The root itself is never pruned.
    Unmark,
}

impl Default for EmptyKeyRemoval {
    fn default() -> Self {
        EmptyKeyRemoval::Ignore
    }
}

/// Options fixed when a trie is constructed.
///
/// ```rust
/// use alpha_trie::{EmptyKeyRemoval, Trie, TrieConfig};
///
/// let config = TrieConfig::default().empty_key_removal(EmptyKeyRemoval::Unmark);
/// let mut trie = Trie::with_config(config);
///
/// trie.insert("").unwrap();
/// trie.remove("");
/// assert!(!trie.search(""));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieConfig {
    pub empty_key_removal: EmptyKeyRemoval,
}

impl TrieConfig {
    /// Sets the empty-key removal policy.
    pub fn empty_key_removal(mut self, policy: EmptyKeyRemoval) -> Self {
        self.empty_key_removal = policy;
        self
    }
}
