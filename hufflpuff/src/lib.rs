pub mod code_table;
pub mod tree;

use common::{Result, Symbol};

pub use crate::code_table::CodeTable;
pub use crate::tree::build_tree::test_prefix_property;
pub use crate::tree::build_tree::tree_to_table;
pub use crate::tree::tree_node::Node;
pub use crate::tree::Tree;
pub use crate::tree::{build_tree_fast, build_tree_heap};
pub use hist::{count_symbols, FrequencyTable};

/// creates a huffman tree, fails with `InvalidInput` if there are no counts
#[inline]
pub fn build_tree<S: Symbol>(counts: &FrequencyTable<S>) -> Result<Tree<S>> {
    build_tree_heap(counts)
}

/// counts the symbols of `input` and derives a prefix code for each of them
pub fn build_code_table<S: Symbol>(input: &[S]) -> Result<CodeTable<S>> {
    let counts = count_symbols(input);
    let tree = build_tree(&counts)?;
    Ok(tree_to_table(&tree))
}

#[cfg(test)]
mod tests {

    use crate::tree::minimum_tree_depth;
    use crate::*;
    use common::HuffError;
    use std::collections::HashSet;

    #[test]
    fn test_example() {
        let src: Vec<u8> = vec![
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 4, 5,
        ];

        let counts = count_symbols(&src);
        let tree = build_tree(&counts).unwrap();
        validate_tree(&tree, &counts);
        println!("{}", tree);
    }

    #[test]
    fn special_case() {
        let src: Vec<u8> = vec![
            1, 2, 3, 3, 4, 4, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
        ];

        let counts = count_symbols(&src);
        let tree = build_tree(&counts).unwrap();
        test_prefix_property(&tree_to_table(&tree));
    }

    #[test]
    fn simple_balanced() {
        let src: Vec<u8> = vec![1, 2, 3, 4];

        let counts = count_symbols(&src);
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.get_depth(), 2);
        test_prefix_property(&tree_to_table(&tree));
    }

    #[test]
    fn balanced_tree_distribution() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let counts = count_symbols(&all_bytes);
        let tree = build_tree(&counts).unwrap();
        validate_tree(&tree, &counts);
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            build_code_table::<char>(&[]).unwrap_err(),
            HuffError::InvalidInput
        );
    }

    #[test]
    fn build_code_table_text() {
        let table = build_code_table(&"abracadabra".chars().collect::<Vec<_>>()).unwrap();
        assert_eq!(table.len(), 5);
        // the most frequent symbol gets the shortest code
        let shortest = table.iter().map(|(_, code)| code.len()).min().unwrap();
        assert_eq!(table.code_len(&'a'), Some(shortest));
        test_prefix_property(&table);
    }

    // input is the number of repeats per symbol
    fn gen_fibo_distribution(fibo_counts: &[u64]) -> Vec<u8> {
        use std::io::Read;
        let mut all_bytes = Vec::new();

        for (num, repeat) in fibo_counts.iter().enumerate() {
            std::io::repeat(num as u8)
                .take(*repeat)
                .read_to_end(&mut all_bytes)
                .unwrap();
        }
        all_bytes
    }

    fn test_fibonacci(fibo_counts: &[u64]) {
        let all_bytes = gen_fibo_distribution(fibo_counts);

        let counts = count_symbols(&all_bytes);
        let tree = build_tree(&counts).unwrap();

        // in the fibonacci case the biggest symbol count should be directly under the root node
        match tree.get_root_node() {
            Node::Internal { left, .. } => {
                assert_eq!(left.symbol(), Some(fibo_counts.len() as u8 - 1));
            }
            Node::Leaf { .. } => panic!("root node should not be a leaf"),
        }
        // every level holds exactly one symbol, except the deepest one
        assert_eq!(tree.get_depth(), fibo_counts.len() - 1);

        validate_tree(&tree, &counts);
    }

    #[test]
    fn long_tree_distribution() {
        test_fibonacci(&[1_u64, 1, 2, 3]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8, 13]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8, 13, 21]);
    }

    fn validate_tree(tree: &Tree<u8>, counts: &FrequencyTable<u8>) {
        // check all symbols are connected
        let mut all_symbols = counts.symbols().collect::<HashSet<u8>>();
        tree.walk_tree(&mut |node, _path, _depth| {
            if let Some(symbol) = node.symbol() {
                assert!(all_symbols.remove(&symbol), "symbol {} found twice", symbol);
            }
        });
        assert_eq!(all_symbols.len(), 0);
        assert_eq!(tree.get_root_node().count(), counts.total());

        // check count of childs are always lower
        tree.walk_tree(&mut |node, _path, _depth| {
            if let Node::Internal { count, left, right } = node {
                assert!(left.count() < *count);
                assert!(right.count() < *count);
                assert_eq!(left.count() + right.count(), *count);
            }
        });
        assert!(tree.get_depth() >= minimum_tree_depth(tree.get_num_symbol_nodes()));

        let table = tree_to_table(tree);
        assert_eq!(table.len(), counts.len());
        test_prefix_property(&table);

        let encoded_bits: u64 = counts
            .iter()
            .map(|(symbol, count)| count * table.code_len(&symbol).unwrap() as u64)
            .sum();
        assert_eq!(encoded_bits, tree.estimate_compressed_size());
    }

    #[test]
    fn test_prefix_codes_zstd_format_example() {
        let src: Vec<u8> = vec![
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 4, 5,
        ];

        let counts = count_symbols(&src);
        let tree = build_tree(&counts).unwrap();

        let table = tree_to_table(&tree);
        test_prefix_property(&table);

        // check prefix codes
        assert_eq!(table.get(&0), Some("1"));
        assert_eq!(table.get(&1), Some("01"));
        assert_eq!(table.get(&2), Some("001"));
        assert_eq!(table.get(&3), None);
        assert_eq!(table.get(&4), Some("0000"));
        assert_eq!(table.get(&5), Some("0001"));

        // codes are listed in walk order, left before right
        let order = table.iter().map(|(symbol, _)| symbol).collect::<Vec<_>>();
        assert_eq!(order, vec![4, 5, 2, 1, 0]);
    }
}
