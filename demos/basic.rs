//! A tour of the trie API
use alpha_trie::{EmptyKeyRemoval, Error, Trie, TrieConfig};

fn main() -> Result<(), Error> {
    env_logger::init();

    // Build a trie from a list of keys
    let mut trie = Trie::from_keys(vec!["hello", "help", "world"])?;
    trie.insert("helm")?;

    // Exact and prefix lookups
    assert!(trie.search("help"));
    assert!(!trie.search("hel"));
    assert!(trie.prefix_search("hel"));

    // Characters outside 'a'..='z' are rejected before anything changes
    if let Err(err) = trie.insert("Hello") {
        println!("rejected: {}", err);
    }

    // View the keys under a prefix
    let view = trie.view_prefix("hel");
    println!("{} keys under {:?}:", view.len(), view.prefix());
    for key in &view {
        println!("  {}", key);
    }

    // Removal prunes the branch that only "world" used
    let before = trie.node_count();
    trie.remove("world");
    println!("nodes: {} -> {}", before, trie.node_count());
    assert!(!trie.prefix_search("w"));

    // Opt in to removing the empty key
    let config = TrieConfig::default().empty_key_removal(EmptyKeyRemoval::Unmark);
    let mut trie = Trie::with_config(config);
    trie.insert("")?;
    trie.remove("");
    assert!(trie.is_empty());

    Ok(())
}
