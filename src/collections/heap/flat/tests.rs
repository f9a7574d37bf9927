#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::heap::{max_heap_order, min_heap_order};
use crate::util::alloc::CountedDrop;

#[test]
fn test_min_heap() {
    let mut heap = FlatHeap::min_heap();
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
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_max_heap() {
    let mut heap = FlatHeap::max_heap();
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
fn test_custom_comparator() {
    // Orders pairs by their second field only.
    let mut heap = FlatHeap::with_comparator(|a: &(char, u32), b: &(char, u32)| a.1 > b.1);
    heap.extend([('a', 3), ('b', 1), ('c', 2)]);

    assert_eq!(heap.pop(), Some(('b', 1)));
    assert_eq!(heap.pop(), Some(('c', 2)));
    assert_eq!(heap.pop(), Some(('a', 3)));
}

#[test]
fn test_duplicates() {
    let mut heap: FlatHeap<_> = [2, 1, 2, 1, 3].into_iter().collect();

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(3));
}

#[test]
fn test_growth() {
    let mut heap = FlatHeap::with_cap(2, min_heap_order::<i32>);
    assert_eq!(heap.cap(), 2);

    heap.extend([3, 1, 2]);
    assert_eq!(
        heap.cap(),
        4,
        "Capacity should double when an insertion finds the heap full."
    );
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_heap_sort() {
    let mut values = [3, 1, 2];
    FlatHeap::heap_sort(&mut values, min_heap_order);
    assert_eq!(values, [1, 2, 3]);

    FlatHeap::heap_sort(&mut values, min_heap_order);
    assert_eq!(
        values,
        [1, 2, 3],
        "Sorting a sorted slice should leave it unchanged."
    );

    FlatHeap::heap_sort(&mut values, max_heap_order);
    assert_eq!(
        values,
        [3, 2, 1],
        "A max-heap ordering should sort descending."
    );

    let mut empty: [i32; 0] = [];
    FlatHeap::heap_sort(&mut empty, min_heap_order);
    assert_eq!(empty, []);
}

#[test]
fn test_heap_sort_subrange() {
    let mut values = [9, 5, 3, 4, 0];
    FlatHeap::heap_sort(&mut values[1..=3], min_heap_order);
    assert_eq!(
        values,
        [9, 3, 4, 5, 0],
        "Sorting a slice shouldn't touch elements outside it."
    );
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut heap = FlatHeap::with_comparator(|_: &CountedDrop, _: &CountedDrop| false);
    heap.extend(iter::repeat_with(|| counter.clone()).take(10));
    let cap = heap.cap();

    heap.clear();

    assert_eq!(counter.count(), 10, "Clearing should drop every element.");
    assert!(heap.is_empty());
    assert_eq!(heap.cap(), cap, "Clearing shouldn't release the capacity.");

    heap.insert(counter.clone());
    assert_eq!(heap.len(), 1, "A cleared heap should accept new elements.");
}

#[test]
fn test_clone() {
    let heap: FlatHeap<_> = [5, 1, 4, 2, 3].into_iter().collect();
    let mut copy = heap.clone();

    copy.insert(0);
    assert_eq!(copy.pop(), Some(0));
    assert_eq!(copy.pop(), Some(1));

    let original: Vec<_> = iter::from_fn({
        let mut heap = heap;
        move || heap.pop()
    })
    .collect();
    assert_eq!(
        original,
        [1, 2, 3, 4, 5],
        "Mutating a clone shouldn't affect the original."
    );
}

#[test]
fn test_debug() {
    let mut heap = FlatHeap::with_cap(4, min_heap_order::<i32>);
    heap.extend([2, 1]);

    assert_eq!(
        format!("{heap:?}"),
        "FlatHeap { contents: [1, 2], len: 2, cap: 4 }",
        "Debug output should include the slot order, length and capacity."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut heap = FlatHeap::with_comparator(|_: &CountedDrop, _: &CountedDrop| false);
    heap.extend(iter::repeat_with(|| counter.clone()).take(10));

    drop(heap);

    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");
}
