use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box and immediately leaked into a raw pointer, so that the
// queue can hold an aliasing tail pointer alongside the owning head chain. take_node re-forms the
// Box to transfer ownership back out.

pub(crate) struct NodePtr<T>(pub(crate) NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Takes ownership of the node back from the pointer.
    ///
    /// # Safety
    /// The pointer must have been created by [`NodePtr::from_node`] and no copy of it may be
    /// used afterwards.
    pub(crate) unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and ownership is transferred to the caller.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub(crate) fn value(&self) -> &T {
        // SAFETY: The node is alive for as long as the owning queue, which this borrow is tied
        // to through the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        // SAFETY: As above; the mutable borrow of the queue guarantees exclusive access.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn next_mut(&mut self) -> &mut Link<T> {
        // SAFETY: As above; the mutable borrow of the queue guarantees exclusive access.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}
