use crate::base::Symbol;
use std::collections::BTreeMap;
use std::ops::Range;

/// Index of a node inside a [`SuffixTrie`](super::SuffixTrie) arena.
pub type NodeId = usize;

/// The root always occupies the first arena slot.
pub const ROOT: NodeId = 0;

/// A node of the compact suffix trie.
///
/// The node's name (the label of the edge leading into it) is stored as a
/// range into the sequence the trie was built from, so splitting an edge
/// only adjusts offsets. `children` is keyed by the first symbol of each
/// child's name; at most one child per leading symbol exists.
#[derive(Debug, Clone)]
pub struct TrieNode {
    start: usize,
    end: usize,
    children: BTreeMap<Symbol, NodeId>,
}

impl TrieNode {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            children: BTreeMap::new(),
        }
    }

    /// Length of the node's name in symbols. Zero only for the root.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Position of the name within the source sequence.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn child(&self, key: Symbol) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    /// Children in ascending order of their leading symbol.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, NodeId)> + '_ {
        self.children.iter().map(|(&k, &v)| (k, v))
    }

    #[inline]
    pub(crate) fn set_child(&mut self, key: Symbol, child: NodeId) {
        self.children.insert(key, child);
    }

    /// Drop the first `count` symbols of the name.
    #[inline]
    pub(crate) fn trim_front(&mut self, count: usize) {
        debug_assert!(count < self.len());
        self.start += count;
    }
}
