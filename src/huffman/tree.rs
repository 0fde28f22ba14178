use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;
use mem_dbg::{MemDbg, MemSize, SizeFlags};

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::{HuffmanError, Result};
use crate::{Freq, NodeId, Symbol};

/// A node of the [`HuffmanTree`]. Children are referenced by their index in the tree's arena.
#[derive(Clone, Debug, PartialEq, Eq, MemDbg, MemSize)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: Freq,
    },
    Internal {
        weight: Freq,
        left: NodeId,
        right: NodeId,
    },
}

impl HuffNode {
    pub fn weight(&self) -> Freq {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// A strict binary prefix tree, stored as an arena of [nodes](HuffNode).
///
/// Every internal node has exactly two children and weighs as much as both of them together.
/// The tree is never modified once built: decompression builds its own copy from the persisted
/// [frequency table](FrequencyTable).
#[derive(Clone, Debug, PartialEq, Eq, MemDbg, MemSize)]
pub struct HuffmanTree {
    /// All the nodes, in creation order. The leaves come first, sorted by symbol.
    nodes: Vec<HuffNode>,

    /// Index of the root in `nodes`.
    root: NodeId,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes until only the root is left.
    ///
    /// Equal weights are ordered by creation index: leaves are created first, in ascending symbol
    /// order, and every merged node gets the next index. The first node extracted becomes the
    /// left child. Building twice from the same table always gives the same tree.
    ///
    /// A table with a single symbol gives a tree made of one leaf. An empty table can't seed a
    /// tree and is rejected.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::MalformedFrequencyTable(
                "cannot build a tree from an empty frequency table".to_string(),
            ));
        }

        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut queue = BinaryHeap::with_capacity(frequencies.len());

        for (symbol, weight) in frequencies.iter() {
            queue.push(Reverse((weight, nodes.len())));
            nodes.push(HuffNode::Leaf {
                symbol: symbol.clone(),
                weight,
            });
        }

        let root = loop {
            match (queue.pop(), queue.pop()) {
                (Some(Reverse((left_weight, left))), Some(Reverse((right_weight, right)))) => {
                    let weight = left_weight.checked_add(right_weight).ok_or_else(|| {
                        HuffmanError::MalformedFrequencyTable(
                            "the sum of the frequencies overflows".to_string(),
                        )
                    })?;
                    queue.push(Reverse((weight, nodes.len())));
                    nodes.push(HuffNode::Internal {
                        weight,
                        left,
                        right,
                    });
                }
                (Some(Reverse((_, root))), None) => break root,
                (None, _) => unreachable!("the queue is seeded with at least one leaf"),
            }
        };

        let tree = Self { nodes, root };

        debug!(
            "Built tree with {} leaves, depth {} ({} bytes)",
            tree.leaf_count(),
            tree.depth(),
            tree.mem_size(SizeFlags::default())
        );

        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node at the given index.
    ///
    /// # Panics
    /// If `id` doesn't belong to this tree.
    pub fn node(&self, id: NodeId) -> &HuffNode {
        &self.nodes[id]
    }

    /// The total number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Whether the whole tree is a single leaf, i.e. the alphabet has one symbol.
    pub fn is_single_leaf(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// The number of edges on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, _, depth)| depth).max().unwrap_or(0)
    }

    /// Visits the tree in pre-order, left child before right child.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(self.root, 0)],
        }
    }
}

/// Pre-order iterator over a [`HuffmanTree`], yielding `(id, node, depth)` for every node.
///
/// Uses an explicit stack, so heavily skewed trees don't grow the call stack.
pub struct Walk<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodeId, &'a HuffNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[id];

        if let HuffNode::Internal { left, right, .. } = node {
            self.stack.push((*right, depth + 1));
            self.stack.push((*left, depth + 1));
        }

        Some((id, node, depth))
    }
}
