use crate::node::{Node, NodeId};

/// One storage slot: either a live node or a link in the free list.
#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Slab-style storage for list nodes, addressed by [`NodeId`].
///
/// Freed slots are threaded into an intrusive free list and reused by later
/// allocations, so repeated insert/remove cycles do not grow the backing
/// vector past its high-water mark. Dropping the arena drops every occupied
/// slot with it, which keeps list teardown iterative no matter how long the
/// chain is.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Total slots ever allocated, including vacant ones.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stores a node, reusing a vacant slot when one is available.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                self.free = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Releases a node's slot back to the free list and returns the node.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant { next_free: self.free },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("double free of arena slot"),
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("stale node id"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("stale node id"),
        }
    }

    /// Drops every node and resets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}
