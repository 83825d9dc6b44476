//! Equivalence tests: all builders must produce identical trees

use test_case::test_case;
use treegen::{builder, count_nodes, node_count, BranchRule, TreeParams};

#[test]
fn test_structural_equivalence_across_heights() {
    for height in 0..=10 {
        let level = builder::level_order(height, 4_i64, |x| x * 4, |x| x + 1);
        let reference = builder::recursive(height, 4_i64, |x| x * 4, |x| x + 1);
        assert_eq!(level, reference, "height {height}");
    }
}

#[test]
fn test_array_matches_flattened_linked_form() {
    for height in 0..=10 {
        let slots = builder::level_array(height, 4_i64, |x| x * 4, |x| x + 1);
        let flattened = builder::level_order(height, 4_i64, |x| x * 4, |x| x + 1)
            .map(|tree| tree.to_heap_vec())
            .unwrap_or_default();
        assert_eq!(slots, flattened, "height {height}");
    }
}

#[test]
fn test_persistent_matches_linked_form() {
    for height in 0..=10 {
        let linked = builder::level_order(height, 4_i64, |x| x * 4, |x| x + 1);
        let persistent = builder::level_persistent(height, 4_i64, |x| x * 4, |x| x + 1);
        match (linked, persistent) {
            (None, None) => assert_eq!(height, 0),
            (Some(linked), Some(persistent)) => {
                assert_eq!(linked.to_heap_vec(), flatten_persistent(&persistent));
            }
            (linked, persistent) => {
                panic!("presence mismatch at height {height}: {linked:?} vs {persistent:?}")
            }
        }
    }
}

// Persistent nodes flattened through the same heap-index convention
fn flatten_persistent(root: &treegen::PersistentNode<i64>) -> Vec<Option<i64>> {
    fn fill(node: &treegen::PersistentNode<i64>, index: usize, slots: &mut [Option<i64>]) {
        slots[index] = Some(node.value);
        if let Some(left) = node.left.as_deref() {
            fill(left, 2 * index + 1, slots);
        }
        if let Some(right) = node.right.as_deref() {
            fill(right, 2 * index + 2, slots);
        }
    }
    let mut slots = vec![None; node_count(root.height())];
    fill(root, 0, &mut slots);
    slots
}

#[test_case(1, 1 ; "single node")]
#[test_case(2, 3 ; "two levels")]
#[test_case(3, 7 ; "three levels")]
#[test_case(4, 15 ; "four levels")]
#[test_case(8, 255 ; "eight levels")]
fn test_node_counts(height: usize, expected: usize) {
    let tree = builder::level_order(height, 4_i64, |x| x * 4, |x| x + 1);
    assert_eq!(count_nodes(tree.as_deref()), expected);
    assert_eq!(node_count(height), expected);
}

#[test]
fn test_custom_branch_scenario() {
    // root 1, left = 2x, right = 3x, height 3
    let tree = builder::level_order(3, 1_i64, |x| x * 2, |x| x * 3).unwrap();
    assert_eq!(
        tree.to_heap_vec(),
        vec![
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(6),
            Some(6),
            Some(9),
        ]
    );
    assert_eq!(tree.count(), 7);
}

#[test]
fn test_params_wrapper_agrees_with_generic_builders() {
    let params = TreeParams {
        height: 5,
        root: 2,
        left: BranchRule::Mul(3),
        right: BranchRule::Add(7),
    };
    let via_params = params.build_linked();
    let via_builder = builder::level_order(5, 2_i64, |x| x * 3, |x| x + 7);
    assert_eq!(via_params, via_builder);
    assert_eq!(params.expected_nodes(), 31);
}
