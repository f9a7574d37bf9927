#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_push_pop() {
    let mut stack = Stack::new();
    stack.push('a');
    stack.push('b');
    stack.push('c');

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some('c'), "Values should pop in LIFO order.");
    assert_eq!(stack.pop(), Some('b'));
    assert_eq!(stack.pop(), Some('a'));
    assert_eq!(stack.pop(), None, "An empty Stack should pop None.");
    assert!(stack.is_empty());
}

#[test]
fn test_top() {
    let mut stack: Stack<_> = ['a', 'b'].into_iter().collect();

    assert_eq!(stack.top(), Some(&'b'));

    if let Some(top) = stack.top_mut() {
        *top = 'z';
    }
    assert_eq!(stack.pop(), Some('z'));
    assert_eq!(stack.top(), Some(&'a'));

    stack.pop();
    assert_eq!(stack.top(), None, "An empty Stack should have no top.");
}

#[test]
fn test_clone() {
    let stack: Stack<_> = ['a', 'b', 'c'].into_iter().collect();
    let mut copy = stack.clone();

    assert_eq!(copy, stack, "A clone should compare equal to its source.");

    copy.push('d');
    assert_eq!(
        stack.top(),
        Some(&'c'),
        "Mutating a clone shouldn't affect the original."
    );
    assert_eq!(copy.pop(), Some('d'));
    assert_eq!(
        copy.pop(),
        Some('c'),
        "A clone should preserve the popping order of its source."
    );
}

#[test]
fn test_iteration() {
    let stack: Stack<_> = (0..5).collect();

    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [4, 3, 2, 1, 0],
        "Borrowed iteration should run from the top down."
    );

    assert_eq!(stack.iter().len(), 5);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut stack: Stack<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    stack.clear();
    assert_eq!(counter.count(), 10, "Clearing should drop every element.");
    assert!(stack.is_empty());

    let stack: Stack<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    drop(stack);
    assert_eq!(counter.count(), 15);
}

#[test]
fn test_deep_stack() {
    let mut stack: Stack<_> = (0..100_000).collect();

    assert_eq!(stack.top(), Some(&99_999));
    stack.clear();
    assert!(
        stack.is_empty(),
        "Clearing a deep Stack should unlink nodes without recursion."
    );
}

#[test]
fn test_swap_with() {
    let mut a: Stack<_> = (0..3).collect();
    let mut b: Stack<_> = (10..12).collect();

    a.swap_with(&mut b);
    assert_eq!(a.pop(), Some(11));
    assert_eq!(b.pop(), Some(2));
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);
}

#[test]
fn test_equality() {
    let a: Stack<_> = (0..3).collect();
    let b: Stack<_> = (0..3).collect();
    let c: Stack<_> = (1..4).collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Stack::new());
}
