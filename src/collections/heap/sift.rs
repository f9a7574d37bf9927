//! Sift routines shared by the heap variants. Both operate on the initialized prefix of a heap's
//! storage as a slice, with `compare(a, b)` returning true when `a` must sit further from the
//! root than `b`.

/// Restores the heap property along the path from `child` to the root after an append.
pub(crate) fn sift_up<T, F>(heap: &mut [T], mut child: usize, compare: &F)
where
    F: Fn(&T, &T) -> bool,
{
    while child > 0 {
        let parent = (child - 1) / 2;

        if compare(&heap[parent], &heap[child]) {
            heap.swap(parent, child);
            child = parent;
        } else {
            break;
        }
    }
}

/// Restores the heap property below `parent` after its value was replaced. At each level the
/// more extreme of the two children is chosen for the exchange, so a single violation can't
/// survive the descent.
pub(crate) fn sift_down<T, F>(heap: &mut [T], mut parent: usize, compare: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let left = 2 * parent + 1;
        if left >= heap.len() {
            break;
        }

        let mut extreme = left;
        let right = left + 1;
        if right < heap.len() && compare(&heap[left], &heap[right]) {
            extreme = right;
        }

        if compare(&heap[parent], &heap[extreme]) {
            heap.swap(parent, extreme);
            parent = extreme;
        } else {
            break;
        }
    }
}
