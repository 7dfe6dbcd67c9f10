use anyhow::{Context, Result};
use log::info;
use longrep_sim::source::read_sequence;
use longrep_sim::trie::SuffixTrie;
use std::path::Path;

pub fn measure_file(path: &Path, show: bool) -> Result<()> {
    let sequence = read_sequence(path)
        .with_context(|| format!("Failed to read DNA from {}", path.display()))?;
    info!("read {} bases from {}", sequence.len() - 1, path.display());

    let trie = SuffixTrie::build(&sequence).context("Failed to build suffix trie")?;
    info!(
        "suffix trie has {} nodes ({} leaves)",
        trie.node_count(),
        trie.leaf_count()
    );

    println!("K = {}", trie.longest_repeat());
    if show {
        let repeat: String = trie
            .longest_repeated_substring()
            .iter()
            .map(|s| s.to_char())
            .collect();
        println!("Repeat: {repeat}");
    }

    Ok(())
}
