use common::Symbol;
use core::cmp::Ordering;

/// A node of the huffman tree. Leafs carry the symbols, internal nodes own both of their children.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node<S: Symbol> {
    Leaf {
        symbol: S,
        /// the number of occurences
        count: u64,
    },
    Internal {
        /// the sum of the counts of both children
        count: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    pub fn leaf(symbol: S, count: u64) -> Self {
        Node::Leaf { symbol, count }
    }

    /// `left` is the node that was removed first from the queue
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            Node::Leaf { count, .. } => *count,
            Node::Internal { count, .. } => *count,
        }
    }

    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl<S: Symbol> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Leaf { symbol, count } => f.write_fmt(format_args!(
                "Leaf{{ symbol:{:?} count:{} }}",
                symbol, count
            )),
            Node::Internal { count, left, right } => f.write_fmt(format_args!(
                "Internal{{ count:{} left:{:?} right:{:?} }}",
                count, left, right
            )),
        }
    }
}

/// Entry of the priority queue used to build the tree.
///
/// `order` is the position in which the node was inserted into the queue. Nodes with the same
/// count leave the queue in insertion order.
#[derive(Debug)]
pub(crate) struct HeapNode<S: Symbol> {
    pub(crate) node: Node<S>,
    pub(crate) order: usize,
}

impl<S: Symbol> HeapNode<S> {
    fn key(&self) -> (u64, usize) {
        (self.node.count(), self.order)
    }
}

impl<S: Symbol> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S: Symbol> Eq for HeapNode<S> {}

impl<S: Symbol> std::cmp::PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl<S: Symbol> std::cmp::Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on counts.
        // In case of a tie we compare insertion positions, which makes the pop order deterministic.
        other.key().cmp(&self.key())
    }
}
