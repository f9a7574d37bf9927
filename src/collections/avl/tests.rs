#![cfg(test)]

use std::cmp;

use super::*;
use super::node::Branch;
use crate::util::alloc::CountedDrop;

/// Walks the whole tree checking the stored heights, the balance bound and the local key order,
/// returning the measured height of the branch.
fn check_invariants<K: Ord, V>(branch: &Branch<K, V>) -> usize {
    match &branch.0 {
        Some(node) => {
            let left = check_invariants(&node.left);
            let right = check_invariants(&node.right);

            assert_eq!(
                node.height,
                1 + cmp::max(left, right),
                "Stored heights should stay exact."
            );
            assert!(
                left.abs_diff(right) <= 1,
                "Subtree heights should differ by at most one."
            );
            if let Some(l) = node.left.0.as_deref() {
                assert!(l.key < node.key, "Left children should hold smaller keys.");
            }
            if let Some(r) = node.right.0.as_deref() {
                assert!(r.key > node.key, "Right children should hold greater keys.");
            }

            node.height
        }
        None => 0,
    }
}

fn root_key<K: Copy, V>(tree: &AvlTree<K, V>) -> Option<K> {
    tree.root.0.as_deref().map(|node| node.key)
}

#[test]
fn test_insert_get() {
    let mut tree = AvlTree::new();

    assert_eq!(tree.insert(3, "three"), None);
    assert_eq!(tree.insert(1, "one"), None);
    assert_eq!(tree.insert(2, "two"), None);
    assert_eq!(tree.len(), 3);

    assert_eq!(tree.get(&2), Some(&"two"));
    assert_eq!(tree.get_entry(&3), Some((&3, &"three")));
    assert_eq!(tree.get(&4), None);
    assert!(tree.contains_key(&1));
    assert!(!tree.contains_key(&4));

    if let Some(value) = tree.get_mut(&1) {
        *value = "uno";
    }
    assert_eq!(tree.get(&1), Some(&"uno"));

    assert_eq!(
        tree.insert(2, "dos"),
        Some("two"),
        "Inserting an existing key should replace and return the old value."
    );
    assert_eq!(tree.len(), 3, "Replacement shouldn't change the length.");
    check_invariants(&tree.root);
}

#[test]
fn test_single_rotations() {
    // Ascending insertion forces a left rotation at the root.
    let rr: AvlTree<_, _> = [1, 2, 3].into_iter().map(|k| (k, ())).collect();
    assert_eq!(
        root_key(&rr),
        Some(2),
        "A right-right chain should rotate the middle key up."
    );
    check_invariants(&rr.root);

    // Descending insertion forces the mirror image.
    let ll: AvlTree<_, _> = [3, 2, 1].into_iter().map(|k| (k, ())).collect();
    assert_eq!(
        root_key(&ll),
        Some(2),
        "A left-left chain should rotate the middle key up."
    );
    check_invariants(&ll.root);
}

#[test]
fn test_double_rotations() {
    let lr: AvlTree<_, _> = [3, 1, 2].into_iter().map(|k| (k, ())).collect();
    assert_eq!(
        root_key(&lr),
        Some(2),
        "A left-right kink should resolve with a double rotation."
    );
    check_invariants(&lr.root);

    let rl: AvlTree<_, _> = [1, 3, 2].into_iter().map(|k| (k, ())).collect();
    assert_eq!(
        root_key(&rl),
        Some(2),
        "A right-left kink should resolve with a double rotation."
    );
    check_invariants(&rl.root);
}

#[test]
fn test_balance_bound() {
    let mut tree = AvlTree::new();
    for i in 0..100 {
        tree.insert(i, i * 10);
        check_invariants(&tree.root);
    }

    assert_eq!(tree.len(), 100);
    assert!(
        tree.root.height() <= 9,
        "100 ascending insertions should stay within the AVL height bound."
    );
    assert_eq!(
        tree.iter().map(|e| *e.0).collect::<Vec<_>>(),
        (0..100).collect::<Vec<_>>(),
        "Iteration should yield keys in ascending order."
    );
}

#[test]
fn test_remove() {
    let mut tree: AvlTree<_, _> = (1..=7).map(|k| (k, k * 10)).collect();

    assert_eq!(tree.remove(&8), None, "Removing an absent key should fail.");
    assert_eq!(tree.len(), 7);

    // A leaf.
    assert_eq!(tree.remove(&1), Some(10));
    check_invariants(&tree.root);

    // A node with one child.
    assert_eq!(tree.remove(&2), Some(20));
    check_invariants(&tree.root);

    // The root, which has two children: its in-order successor is spliced up.
    let root = root_key(&tree).expect("The tree should still have a root.");
    assert_eq!(tree.remove(&root), Some(root * 10));
    check_invariants(&tree.root);

    assert_eq!(tree.len(), 4);
    let mut expected: Vec<_> = (3..=7).filter(|k| *k != root).collect();
    expected.sort_unstable();
    assert_eq!(
        tree.iter().map(|e| *e.0).collect::<Vec<_>>(),
        expected,
        "The remaining keys should still iterate in order."
    );

    for key in expected {
        assert_eq!(tree.remove(&key), Some(key * 10));
        check_invariants(&tree.root);
    }
    assert!(tree.is_empty(), "Removing every key should empty the tree.");
}

#[test]
fn test_remove_rebalances() {
    // Removing from the shallow side must rotate the deep side back into balance.
    let mut tree: AvlTree<_, _> = [4, 2, 6, 1, 3, 5, 7, 8]
        .into_iter()
        .map(|k| (k, ()))
        .collect();

    for key in [1, 3, 2] {
        tree.remove(&key);
        check_invariants(&tree.root);
    }

    assert_eq!(
        tree.iter().map(|e| *e.0).collect::<Vec<_>>(),
        [4, 5, 6, 7, 8]
    );
}

#[test]
fn test_lower_bound() {
    let tree: AvlTree<_, _> = [1, 3, 5, 8].into_iter().map(|k| (k, ())).collect();

    assert_eq!(
        tree.lower_bound(&4),
        Some(&5),
        "The bound should be the smallest key not less than the query."
    );
    assert_eq!(
        tree.lower_bound(&5),
        Some(&5),
        "An exact match should be its own bound."
    );
    assert_eq!(tree.lower_bound(&0), Some(&1));
    assert_eq!(
        tree.lower_bound(&9),
        None,
        "A query past the greatest key should have no bound."
    );
}

#[test]
fn test_min_max() {
    let tree: AvlTree<_, _> = [5, 1, 8, 3].into_iter().map(|k| (k, ())).collect();

    assert_eq!(tree.min_key(), Some(&1));
    assert_eq!(tree.max_key(), Some(&8));

    let empty: AvlTree<i32, ()> = AvlTree::new();
    assert_eq!(empty.min_key(), None);
    assert_eq!(empty.max_key(), None);
}

#[test]
fn test_custom_comparator() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    tree.extend([1, 3, 2].into_iter().map(|k| (k, ())));

    assert_eq!(
        tree.iter().map(|e| *e.0).collect::<Vec<_>>(),
        [3, 2, 1],
        "A reversed comparator should reverse the iteration order."
    );
    assert_eq!(
        tree.min_key(),
        Some(&3),
        "The comparator decides which key counts as smallest."
    );
}

#[test]
fn test_clone() {
    let tree: AvlTree<_, _> = (0..20).map(|k| (k, k * 10)).collect();
    let mut copy = tree.clone();

    assert_eq!(
        copy.root.height(),
        tree.root.height(),
        "A clone should preserve the source's shape."
    );
    check_invariants(&copy.root);

    copy.remove(&10);
    copy.insert(100, 1000);
    assert_eq!(
        tree.get(&10),
        Some(&100),
        "Mutating a clone shouldn't affect the original."
    );
    assert_eq!(tree.get(&100), None);
}

#[test]
fn test_iteration() {
    let tree: AvlTree<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();

    assert_eq!(
        tree.iter().collect::<Vec<_>>(),
        [(&1, &'a'), (&2, &'b'), (&3, &'c')]
    );
    assert_eq!(tree.iter().len(), 3);

    assert_eq!(
        tree.into_iter().collect::<Vec<_>>(),
        [(1, 'a'), (2, 'b'), (3, 'c')],
        "Owned iteration should also run in ascending key order."
    );
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut tree: AvlTree<_, _> = (0..10).map(|k| (k, counter.clone())).collect();

    tree.clear();
    assert_eq!(counter.count(), 10, "Clearing should drop every value.");
    assert!(tree.is_empty());
    assert!(
        tree.insert(1, counter.clone()).is_none(),
        "A cleared tree should accept new entries."
    );

    drop(tree);
    assert_eq!(counter.count(), 11);
}

#[test]
fn test_swap_with() {
    let mut a: AvlTree<_, _> = [(1, 'a')].into_iter().collect();
    let mut b: AvlTree<_, _> = [(2, 'b'), (3, 'c')].into_iter().collect();

    a.swap_with(&mut b);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 1);
    assert_eq!(a.get(&2), Some(&'b'));
    assert_eq!(b.get(&1), Some(&'a'));
}

#[test]
fn test_display() {
    let tree: AvlTree<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    assert_eq!(format!("{tree}"), "{1: 'a', 2: 'b'}");
}
