//! Huffman code tree construction.
//!
//! The tree is built by greedy merging: every symbol starts as a leaf in a
//! min-priority queue, the two lightest nodes are removed and joined under a
//! new internal node (first removed on the left), and the result goes back
//! into the queue until one node remains.
//!
//! ## Tie-Break Contract
//! Every node carries a creation sequence number. Leaves are numbered
//! `0..k` in frequency-table order (first occurrence in the input, or record
//! order in a side file); each merged node takes the next number. Among
//! nodes of equal weight the one with the smaller number is extracted first.
//! This makes the tree, and therefore the encoded bytes, fully determined
//! by the frequency table.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::frequency::FrequencyTable;

/// Node of a code tree. Internal nodes own their two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its count.
    Leaf { symbol: u8, weight: u64 },
    /// Two subtrees and the sum of their leaf counts.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Total count of the leaves below this node.
    #[inline]
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaf nodes.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry ordering nodes by `(weight, sequence)`.
struct Pending {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior on a BinaryHeap
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Optimal prefix-code tree for one frequency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    /// Build the tree for `frequencies`.
    ///
    /// Returns `None` for an empty table. With a single distinct symbol the
    /// root is that symbol's leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0;

        for entry in frequencies.entries() {
            heap.push(Pending {
                weight: entry.count,
                seq,
                node: Node::Leaf {
                    symbol: entry.symbol,
                    weight: entry.count,
                },
            });
            seq += 1;
        }

        loop {
            let first = heap.pop()?;
            let Some(second) = heap.pop() else {
                let tree = Self { root: first.node };
                debug!(
                    symbols = frequencies.len(),
                    weight = tree.weight(),
                    depth = tree.depth(),
                    "built code tree"
                );
                return Some(tree);
            };

            // Cannot overflow: the table total fits in a u64.
            let weight = first.weight + second.weight;
            trace!(
                left = first.seq,
                right = second.seq,
                merged = seq,
                weight,
                "merge"
            );
            heap.push(Pending {
                weight,
                seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }
    }

    /// Root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sum of all leaf counts.
    #[inline]
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
