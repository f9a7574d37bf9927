#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::heap::{max_heap_order, min_heap_order};
use crate::util::alloc::CountedDrop;

#[test]
fn test_min_heap() {
    let mut heap = BoxedHeap::min_heap();
    heap.extend([5, 1, 4, 2, 3]);

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some(&1));

    for i in 1..=5 {
        assert_eq!(
            heap.pop(),
            Some(i),
            "A min-heap should pop in ascending order."
        );
    }
    assert_eq!(heap.pop(), None, "An empty heap should pop None.");
}

#[test]
fn test_max_heap() {
    let mut heap = BoxedHeap::max_heap();
    heap.extend([5, 1, 4, 2, 3]);

    for i in (1..=5).rev() {
        assert_eq!(
            heap.pop(),
            Some(i),
            "A max-heap should pop in descending order."
        );
    }
}

#[test]
fn test_large_elements() {
    // The point of this variant: entire arrays move only by pointer during sifting.
    let mut heap = BoxedHeap::with_comparator(|a: &[u64; 64], b: &[u64; 64]| a[0] > b[0]);
    heap.insert([3; 64]);
    heap.insert([1; 64]);
    heap.insert([2; 64]);

    assert_eq!(heap.pop().map(|a| a[0]), Some(1));
    assert_eq!(heap.pop().map(|a| a[0]), Some(2));
    assert_eq!(heap.pop().map(|a| a[0]), Some(3));
}

#[test]
fn test_heap_sort() {
    let mut values = [3, 1, 2];
    BoxedHeap::heap_sort(&mut values, min_heap_order);
    assert_eq!(values, [1, 2, 3]);

    BoxedHeap::heap_sort(&mut values, min_heap_order);
    assert_eq!(
        values,
        [1, 2, 3],
        "Sorting a sorted slice should leave it unchanged."
    );

    BoxedHeap::heap_sort(&mut values, max_heap_order);
    assert_eq!(values, [3, 2, 1]);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut heap = BoxedHeap::with_comparator(|_: &CountedDrop, _: &CountedDrop| false);
    heap.extend(iter::repeat_with(|| counter.clone()).take(10));

    heap.clear();

    assert_eq!(counter.count(), 10, "Clearing should drop every element.");
    assert!(heap.is_empty());
}

#[test]
fn test_clone() {
    let heap: BoxedHeap<_> = [3, 1, 2].into_iter().collect();
    let mut copy = heap.clone();

    copy.insert(0);
    assert_eq!(copy.pop(), Some(0));

    let original: Vec<_> = iter::from_fn({
        let mut heap = heap;
        move || heap.pop()
    })
    .collect();
    assert_eq!(
        original,
        [1, 2, 3],
        "Mutating a clone shouldn't affect the original."
    );
}

#[test]
fn test_debug() {
    let mut heap = BoxedHeap::with_cap(4, min_heap_order::<i32>);
    heap.extend([2, 1]);

    assert_eq!(
        format!("{heap:?}"),
        "BoxedHeap { contents: [1, 2], len: 2, cap: 4 }",
        "Debug output should include the slot order, length and capacity."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut heap = BoxedHeap::with_comparator(|_: &CountedDrop, _: &CountedDrop| false);
    heap.extend(iter::repeat_with(|| counter.clone()).take(10));

    drop(heap);

    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");
}
