use std::collections::BinaryHeap;
use std::collections::VecDeque;

use common::{HuffError, Result, Symbol, SINGLE_SYMBOL_CODE};
use hist::FrequencyTable;
use log::*;

use crate::code_table::find_prefix_violation;
use crate::code_table::CodeTable;
use crate::tree::tree_node::HeapNode;
use crate::tree::Tree;
use crate::Node;

/// creates a huffman tree with a priority queue
///
/// Every symbol is inserted as a leaf in first-occurrence order. The two nodes with the lowest
/// count are merged until only the root is left, the first removed node becomes the left child.
/// Nodes with equal counts are removed in the order they were inserted.
pub fn build_tree_heap<S: Symbol>(counts: &FrequencyTable<S>) -> Result<Tree<S>> {
    if counts.is_empty() {
        return Err(HuffError::InvalidInput);
    }
    let mut order = 0;
    let mut heap = BinaryHeap::with_capacity(counts.len());
    for (symbol, count) in counts.iter() {
        heap.push(HeapNode {
            node: Node::leaf(symbol, count),
            order: increment_return_old(&mut order),
        });
    }

    let root = loop {
        match (heap.pop(), heap.pop()) {
            (Some(left), Some(right)) => {
                // add internal Node with aggregated count
                heap.push(HeapNode {
                    node: Node::merge(left.node, right.node),
                    order: increment_return_old(&mut order),
                });
            }
            // last node, which will be the root node
            (Some(last), None) => break last.node,
            (None, _) => return Err(HuffError::InvalidInput),
        }
    };

    let tree = Tree {
        root,
        num_symbols: counts.len(),
    };
    debug!(
        "built tree for {} symbols, depth {}",
        tree.num_symbols,
        tree.get_depth()
    );
    Ok(tree)
}

/// creates a huffman tree with two queues, without a heap
///
/// The leafs are sorted ASC by count and parents are created in non-decreasing count order, so
/// the lowest node is always at the front of one of the two queues. The sort is stable and every
/// leaf was queued before any parent, which gives the same tree as `build_tree_heap`.
pub fn build_tree_fast<S: Symbol>(counts: &FrequencyTable<S>) -> Result<Tree<S>> {
    if counts.is_empty() {
        return Err(HuffError::InvalidInput);
    }
    let mut leafs: Vec<Node<S>> = counts
        .iter()
        .map(|(symbol, count)| Node::leaf(symbol, count))
        .collect();
    // sort all nodes with a symbol ASC by count
    leafs.sort_by_key(|node| node.count());
    let mut leafs: VecDeque<Node<S>> = leafs.into();
    let mut parents: VecDeque<Node<S>> = VecDeque::with_capacity(leafs.len());

    while leafs.len() + parents.len() > 1 {
        let left = pop_lowest(&mut leafs, &mut parents).ok_or(HuffError::InvalidInput)?;
        let right = pop_lowest(&mut leafs, &mut parents).ok_or(HuffError::InvalidInput)?;
        parents.push_back(Node::merge(left, right));
    }
    let root = leafs
        .pop_front()
        .or_else(|| parents.pop_front())
        .ok_or(HuffError::InvalidInput)?;

    Ok(Tree {
        root,
        num_symbols: counts.len(),
    })
}

/// on equal counts the leaf is taken, since it was queued before the parent
#[inline]
fn pop_lowest<S: Symbol>(
    leafs: &mut VecDeque<Node<S>>,
    parents: &mut VecDeque<Node<S>>,
) -> Option<Node<S>> {
    match (leafs.front(), parents.front()) {
        (Some(leaf), Some(parent)) if parent.count() < leaf.count() => parents.pop_front(),
        (Some(_), _) => leafs.pop_front(),
        (None, _) => parents.pop_front(),
    }
}

/// converts the tree into a table with prefixes for each symbol
///
/// A tree which is a single leaf gets `SINGLE_SYMBOL_CODE`, since there is no path to the leaf.
pub fn tree_to_table<S: Symbol>(tree: &Tree<S>) -> CodeTable<S> {
    let mut table = CodeTable::with_capacity(tree.get_num_symbol_nodes());
    if let Node::Leaf { symbol, .. } = tree.get_root_node() {
        table.insert(*symbol, SINGLE_SYMBOL_CODE.to_string());
        return table;
    }
    tree.walk_tree(&mut |node, path, _depth| {
        if let Some(symbol) = node.symbol() {
            if !table.insert(symbol, path.to_string()) {
                warn!("symbol {:?} found twice in tree, keeping first code", symbol);
            }
        }
    });

    if log_enabled!(Level::Trace) {
        for (symbol, code) in table.iter() {
            trace!("{:?}: {}", symbol, code);
        }
    }
    table
}

#[inline]
pub fn increment_return_old(val: &mut usize) -> usize {
    *val += 1;
    *val - 1
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// Panics on the first code found to be the prefix of another code.
pub fn test_prefix_property<S: Symbol>(table: &CodeTable<S>) {
    if let Some((prefix, symbol)) = find_prefix_violation(table) {
        panic!(
            "invalid prefix detected between {:?} ({:?}) and {:?} ({:?})",
            prefix,
            table.get(&prefix),
            symbol,
            table.get(&symbol)
        );
    }
}
