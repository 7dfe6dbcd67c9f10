//! Repeat-length engine.
//!
//! Builds a compact trie of all suffixes of a sentinel-terminated sequence
//! and reports the length of its longest repeated substring.

mod node;
mod suffix_trie;

pub use node::{NodeId, TrieNode, ROOT};
pub use suffix_trie::SuffixTrie;

use crate::base::Sequence;
use crate::errors::Result;

/// Length of the longest substring of `sequence` (sentinel excluded) that
/// starts at two or more distinct positions.
///
/// The trie is built and dropped within the call; use
/// [`SuffixTrie::build`] to keep it for inspection.
///
/// ```
/// use longrep_sim::base::Sequence;
/// use longrep_sim::trie::compute_longest_repeat;
///
/// let seq: Sequence = "GATTACA$".parse().unwrap();
/// assert_eq!(compute_longest_repeat(&seq).unwrap(), 1);
/// ```
pub fn compute_longest_repeat(sequence: &Sequence) -> Result<usize> {
    SuffixTrie::build(sequence).map(|trie| trie.longest_repeat())
}

/// Like [`compute_longest_repeat`], but takes raw ASCII where `$` is the
/// sentinel. Bytes that are neither a base nor `$` fail with
/// `InvalidSymbol` before any trie is built.
pub fn compute_longest_repeat_ascii(bytes: &[u8]) -> Result<usize> {
    let sequence = Sequence::from_ascii(bytes)?;
    compute_longest_repeat(&sequence)
}
