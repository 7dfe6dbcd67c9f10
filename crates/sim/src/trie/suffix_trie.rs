use super::node::{NodeId, TrieNode, ROOT};
use crate::base::{Sequence, Symbol};
use crate::errors::Result;
use std::fmt;

/// Compact trie holding every suffix of a sentinel-terminated sequence.
///
/// The trie is built by inserting the suffixes one by one, from the shortest
/// non-trivial suffix (`len - 2`) to the full sequence. Each insertion walks
/// down from the root as far as the suffix agrees with what is already
/// stored, then either hangs a new leaf off an existing node or splits an
/// edge in two. The depth reached before diverging is the length of the
/// longest prefix the suffix shares with any earlier suffix, and the maximum
/// over all insertions is the longest repeated substring length.
///
/// This is the plain quadratic construction: no suffix links, so each
/// insertion may rescan up to `len` symbols.
///
/// Nodes are kept in an arena and refer to their children by index. Edge
/// labels are ranges into the borrowed sequence.
///
/// # Examples
///
/// ```
/// use longrep_sim::base::Sequence;
/// use longrep_sim::trie::SuffixTrie;
///
/// let seq: Sequence = "ACGTACGT$".parse().unwrap();
/// let trie = SuffixTrie::build(&seq).unwrap();
/// assert_eq!(trie.longest_repeat(), 4);
/// assert_eq!(trie.leaf_count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTrie<'a> {
    sequence: &'a [Symbol],
    nodes: Vec<TrieNode>,
    longest_repeat: usize,
}

impl<'a> SuffixTrie<'a> {
    /// Build the trie for `sequence`.
    ///
    /// Fails with `MalformedSequence` before allocating anything if the
    /// sequence is empty or the sentinel is missing or not unique and final.
    /// The sentinel-only sequence is valid and yields an empty trie.
    pub fn build(sequence: &'a Sequence) -> Result<Self> {
        sequence.validate()?;
        let symbols = sequence.as_slice();

        let mut nodes = Vec::with_capacity(2 * symbols.len());
        nodes.push(TrieNode::new(0, 0));

        let mut longest_repeat = 0;
        for index in (0..symbols.len() - 1).rev() {
            let score = insert_suffix(&mut nodes, symbols, index);
            longest_repeat = longest_repeat.max(score);
        }

        Ok(Self {
            sequence: symbols,
            nodes,
            longest_repeat,
        })
    }

    /// Length of the longest substring occurring at two or more positions.
    #[inline]
    pub fn longest_repeat(&self) -> usize {
        self.longest_repeat
    }

    /// The sequence the trie was built from.
    #[inline]
    pub fn sequence(&self) -> &'a [Symbol] {
        self.sequence
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id)
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves. Every inserted suffix ends in exactly one leaf, so
    /// this is `len - 1` for a non-trivial sequence.
    pub fn leaf_count(&self) -> usize {
        self.nodes[1..].iter().filter(|n| n.is_leaf()).count()
    }

    /// Children of node `id` as `(first symbol, child)` pairs in symbol
    /// order, or `None` if no such node exists.
    pub fn children(&self, id: NodeId) -> Option<impl Iterator<Item = (Symbol, NodeId)> + '_> {
        self.nodes.get(id).map(|node| node.children())
    }

    /// The symbols naming node `id`, or `None` if no such node exists.
    pub fn label(&self, id: NodeId) -> Option<&'a [Symbol]> {
        let sequence = self.sequence;
        self.nodes.get(id).map(|n| &sequence[n.span()])
    }

    /// One occurrence of a longest repeated substring.
    ///
    /// Its length always equals [`longest_repeat`](Self::longest_repeat).
    /// Among several candidates of equal length, the one reached first in
    /// symbol order is returned.
    pub fn longest_repeated_substring(&self) -> &'a [Symbol] {
        let mut best: (usize, usize) = (0, 0); // (start, end)
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            let span = node.span();
            let reached = depth + node.len();

            if id != ROOT && !node.is_leaf() && reached > best.1 - best.0 {
                // A node's name sits `depth` symbols into a suffix starting
                // at `span.start - depth`.
                best = (span.start - depth, span.end);
            }

            let children: Vec<NodeId> = node.children().map(|(_, c)| c).collect();
            for child in children.into_iter().rev() {
                stack.push((child, reached));
            }
        }

        &self.sequence[best.0..best.1]
    }

    /// Render the trie as an indented outline, one node per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SuffixTrie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(root)")?;

        let mut stack: Vec<(NodeId, usize)> = self
            .root()
            .children()
            .map(|(_, c)| (c, 1))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            write!(f, "{:indent$}", "", indent = depth * 2)?;
            for symbol in &self.sequence[node.span()] {
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;

            let children: Vec<NodeId> = node.children().map(|(_, c)| c).collect();
            for child in children.into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}

/// Insert the suffix starting at `suffix_start` and return the length of the
/// prefix it shares with the suffixes inserted before it.
///
/// Written as a loop rather than by recursion so that long, repetitive
/// sequences cannot exhaust the call stack. `score` accumulates the name
/// length of every node passed on the way down.
fn insert_suffix(nodes: &mut Vec<TrieNode>, symbols: &[Symbol], suffix_start: usize) -> usize {
    let end = symbols.len();
    let mut node = ROOT;
    let mut pos = suffix_start;
    let mut score = 0;

    loop {
        score += nodes[node].len();
        let key = symbols[pos];

        let Some(child) = nodes[node].child(key) else {
            let leaf = push_node(nodes, pos, end);
            nodes[node].set_child(key, leaf);
            return score;
        };

        let child_span = nodes[child].span();
        let name = &symbols[child_span.clone()];
        let matched = common_prefix_len(name, &symbols[pos..]);

        if matched == name.len() {
            // The sentinel is unique and final, so no suffix can be fully
            // contained in an existing path.
            debug_assert!(
                pos + matched < end,
                "suffix {suffix_start} is already present in the trie"
            );
            if pos + matched == end {
                return score + matched;
            }
            node = child;
            pos += matched;
            continue;
        }

        // Partial match: put a fork holding the shared part in place of
        // `child`, then hang both `child` (minus the shared part) and a new
        // leaf for the rest of the suffix below it.
        let fork = push_node(nodes, child_span.start, child_span.start + matched);
        nodes[child].trim_front(matched);
        nodes[fork].set_child(symbols[child_span.start + matched], child);

        let leaf = push_node(nodes, pos + matched, end);
        nodes[fork].set_child(symbols[pos + matched], leaf);

        nodes[node].set_child(key, fork);
        return score + matched;
    }
}

#[inline]
fn push_node(nodes: &mut Vec<TrieNode>, start: usize, end: usize) -> NodeId {
    nodes.push(TrieNode::new(start, end));
    nodes.len() - 1
}

#[inline]
fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
