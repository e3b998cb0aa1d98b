//! Runs the reference removal scenario and prints each query result.
//!
//! `RUST_LOG=alpha_trie=trace cargo run --example scenario` also shows every pruned node.
use alpha_trie::{Error, Trie};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut trie = Trie::from_keys(vec!["bad", "bat", "cat", "cut", "geek", "geeks", "zoo"])?;

    trie.remove("bad");
    println!("search:bad->{}", trie.search("bad"));
    println!("prefixSearch:bad->{}", trie.prefix_search("bad"));

    // Other test cases
    println!("search:bat->{}", trie.search("bat"));
    println!("search:cat->{}", trie.search("cat"));
    println!("search:geek->{}", trie.search("geek"));
    println!("search:zoo->{}", trie.search("zoo"));

    trie.remove("bat");
    println!("search:bat->{}", trie.search("bat"));
    println!("prefixSearch:bat->{}", trie.prefix_search("bat"));

    println!("search:geeks->{}", trie.search("geeks"));
    println!("search:geek->{}", trie.search("geek"));

    Ok(())
}
