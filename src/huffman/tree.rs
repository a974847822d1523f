use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;

/// Huffman code tree
///
/// Leaves carry a symbol; internal nodes carry only the summed weight of their subtree and
/// always have exactly two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeTree {
    Leaf { symbol: char, weight: u64 },
    Internal { weight: u64, left: Box<CodeTree>, right: Box<CodeTree> },
}

/// Heap entry ordered by weight, then by rank
///
/// Leaves are ranked by symbol order and merged nodes after all leaves in creation order, so
/// equal weights always resolve the same way.
struct HeapNode {
    weight: u64,
    rank: usize,
    node: CodeTree,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for HeapNode {}
impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then(self.rank.cmp(&other.rank))
    }
}

impl CodeTree {
    /// Build the tree for `frequencies`
    ///
    /// Returns `None` for an empty table. A single distinct symbol yields a lone leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<CodeTree> {
        let mut heap: BinaryHeap<Reverse<HeapNode>> = frequencies
            .iter()
            .enumerate()
            .map(|(rank, (symbol, weight))| {
                Reverse(HeapNode { weight, rank, node: CodeTree::Leaf { symbol, weight } })
            })
            .collect();

        let mut next_rank = heap.len();
        while heap.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let weight = left.weight + right.weight;
            heap.push(Reverse(HeapNode {
                weight,
                rank: next_rank,
                node: CodeTree::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            next_rank += 1;
        }

        heap.pop().map(|Reverse(root)| root.node)
    }

    pub fn weight(&self) -> u64 {
        match self {
            CodeTree::Leaf { weight, .. } | CodeTree::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeTree::Leaf { .. })
    }

    /// Number of leaves (distinct symbols)
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                CodeTree::Leaf { .. } => count += 1,
                CodeTree::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }
}
