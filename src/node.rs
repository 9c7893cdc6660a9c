/// Stable handle to a node slot in the arena.
///
/// Identifiers stay valid across unrelated insertions and removals; a slot
/// index is only reused after the node occupying it has been freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the singly linked list: one value and an optional successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(data: T, next: Option<NodeId>) -> Self {
        Node { data, next }
    }
}
