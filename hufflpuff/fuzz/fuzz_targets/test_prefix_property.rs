#![no_main]

use hufflpuff::build_tree_fast;
use hufflpuff::build_tree_heap;
use hufflpuff::count_symbols;
use hufflpuff::test_prefix_property;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let counts = count_symbols(data);
    let tree = build_tree_heap(&counts).unwrap();
    let table = tree_to_table(&tree);
    test_prefix_property(&table);
    assert_eq!(table, tree_to_table(&build_tree_fast(&counts).unwrap()));
});
