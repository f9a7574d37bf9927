pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}
