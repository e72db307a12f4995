use super::tree_node::Node;
use crate::tree::render_tree::render_plan_to;
use common::Symbol;
use common::{ONE_BIT, ZERO_BIT};

#[derive(Debug, Clone)]
pub struct Tree<S: Symbol> {
    /// a leaf, if only one symbol was counted, otherwise an internal node
    pub(crate) root: Node<S>,
    /// the number of leafs, which equals the number of distinct symbols
    pub(crate) num_symbols: usize,
}

impl<S: Symbol> Tree<S> {
    pub fn get_root_node(&self) -> &Node<S> {
        &self.root
    }

    pub fn get_num_symbol_nodes(&self) -> usize {
        self.num_symbols
    }

    /// returns the length of the longest path from the root to a leaf, 0 for a single leaf
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(&mut |_node, _path, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }

    /// returns the number of bits the counted input takes when encoded with this tree
    pub fn estimate_compressed_size(&self) -> u64 {
        let mut size_in_bits = 0;
        self.walk_tree(&mut |node, _path, depth| {
            if node.is_leaf() {
                // a single leaf still needs one bit per symbol
                size_in_bits += node.count() * depth.max(1) as u64;
            }
        });
        size_in_bits
    }

    /// Visits every node depth-first, left before right.
    ///
    /// `fun` gets the node, the path from the root (`'0'` for left, `'1'` for right) and the depth.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node<S>, &str, usize),
    {
        let mut path = String::new();
        walk_graph_internal(&self.root, &mut path, fun);
    }
}

fn walk_graph_internal<S: Symbol, F>(node: &Node<S>, path: &mut String, fun: &mut F)
where
    F: FnMut(&Node<S>, &str, usize),
{
    // the path only contains ascii bits, so its byte length is the depth
    fun(node, path, path.len());
    if let Node::Internal { left, right, .. } = node {
        path.push(ZERO_BIT);
        walk_graph_internal(left, path, fun);
        path.pop();

        path.push(ONE_BIT);
        walk_graph_internal(right, path, fun);
        path.pop();
    }
}

impl<S: Symbol> std::fmt::Display for Tree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
