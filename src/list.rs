use std::fmt;

use crate::arena::Arena;
use crate::error::ListError;
use crate::node::{Node, NodeId};

/// A singly linked list backed by a slab-style arena.
///
/// The list owns its nodes through the arena and addresses them by stable
/// index, so no `unsafe` pointer juggling is needed and dropping a long list
/// never recurses. Positional operations ([`insert_at`](Self::insert_at),
/// [`remove_at`](Self::remove_at)) use **1-based** positions: the first
/// element is position 1.
#[derive(Debug)]
pub struct LinkedList<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        LinkedList {
            arena: Arena::new(),
            head: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.arena.get(id).data)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.length = 0;
    }

    /// Inserts an element at the front of the list. O(1).
    pub fn push_front(&mut self, data: T) {
        let id = self.arena.alloc(Node::new(data, self.head));
        self.head = Some(id);
        self.length += 1;
    }

    /// Inserts an element at the back of the list. O(n) due to the walk to
    /// the last node.
    pub fn push_back(&mut self, data: T) {
        let id = self.arena.alloc(Node::new(data, None));
        match self.last_node() {
            Some(last) => self.arena.get_mut(last).next = Some(id),
            None => self.head = Some(id),
        }
        self.length += 1;
    }

    /// Inserts an element so that it becomes the node at 1-based position
    /// `index`. `index == 1` prepends; `index == len() + 1` appends.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] when `index` is outside
    /// `1..=len() + 1`; the list is left untouched on failure.
    pub fn insert_at(&mut self, index: usize, data: T) -> Result<(), ListError> {
        if index < 1 || index > self.length + 1 {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.length,
            });
        }

        if index == 1 {
            self.push_front(data);
            return Ok(());
        }

        // index >= 2 passed validation, so the predecessor at position
        // index - 1 exists.
        let prev = self.node_at(index - 1);
        let next = self.arena.get(prev).next;
        let id = self.arena.alloc(Node::new(data, next));
        self.arena.get_mut(prev).next = Some(id);
        self.length += 1;
        Ok(())
    }

    /// Removes and returns the element at 1-based position `index`.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] when `index` is outside
    /// `1..=len()` (any index fails on an empty list); the list is left
    /// untouched on failure. O(1) for position 1, O(n) otherwise.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index < 1 || index > self.length {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.length,
            });
        }

        let target = if index == 1 {
            let id = self.head.expect("validated non-empty");
            self.head = self.arena.get(id).next;
            id
        } else {
            let prev = self.node_at(index - 1);
            let id = self.arena.get(prev).next.expect("validated in range");
            self.arena.get_mut(prev).next = self.arena.get(id).next;
            id
        };

        self.length -= 1;
        Ok(self.arena.free(target).data)
    }

    /// Reverses the list in place by redirecting each node's successor link
    /// to the previously visited node. O(n) time, O(1) extra space; a no-op
    /// on an empty list.
    pub fn reverse(&mut self) {
        let mut previous = None;
        let mut current = self.head;

        while let Some(id) = current {
            let next = self.arena.get(id).next;
            self.arena.get_mut(id).next = previous;
            previous = Some(id);
            current = next;
        }

        self.head = previous;
    }

    /// Returns a forward iterator over the list that borrows the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.head,
        }
    }

    /// Walks to the node at 1-based `position`. Caller must have validated
    /// `1 <= position <= len()`.
    fn node_at(&self, position: usize) -> NodeId {
        let mut current = self.head.expect("validated non-empty");
        for _ in 0..position - 1 {
            current = self.arena.get(current).next.expect("validated in range");
        }
        current
    }

    fn last_node(&self) -> Option<NodeId> {
        let mut current = self.head?;
        while let Some(next) = self.arena.get(current).next {
            current = next;
        }
        Some(current)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Writes the elements front to back, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends the elements in order, walking to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_node();
        for value in iter {
            let id = self.arena.alloc(Node::new(value, None));
            match tail {
                Some(t) => self.arena.get_mut(t).next = Some(id),
                None => self.head = Some(id),
            }
            tail = Some(id);
            self.length += 1;
        }
    }
}

/// An iterator that consumes the list, yielding elements front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let id = self.0.head?;
        self.0.head = self.0.arena.get(id).next;
        self.0.length -= 1;
        Some(self.0.arena.free(id).data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.length, Some(self.0.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A forward iterator over the list that borrows the list.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.arena.get(self.current?);
        self.current = node.next;
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let list: LinkedList<i32> = LinkedList::default();
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_front() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_push_back() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_insert_at_front_updates_length() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.insert_at(1, 1).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2]);
    }

    #[test]
    fn test_insert_at_middle_and_append() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        list.insert_at(2, 9).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &9, &2, &3]);

        list.insert_at(5, 4).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &9, &2, &3, &4]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_insert_at_out_of_range() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();

        assert_eq!(
            list.insert_at(0, 9),
            Err(ListError::IndexOutOfRange { index: 0, len: 2 })
        );
        assert_eq!(
            list.insert_at(4, 9),
            Err(ListError::IndexOutOfRange { index: 4, len: 2 })
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2]);
    }

    #[test]
    fn test_remove_at_head_updates_length() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        assert_eq!(list.remove_at(1), Ok(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[test]
    fn test_remove_at_middle_and_tail() {
        let mut list: LinkedList<i32> = [1, 9, 2, 3].into_iter().collect();

        assert_eq!(list.remove_at(2), Ok(9));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);

        assert_eq!(list.remove_at(3), Ok(3));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_at_empty_and_out_of_range() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(
            list.remove_at(1),
            Err(ListError::IndexOutOfRange { index: 1, len: 0 })
        );

        list.push_back(1);
        assert_eq!(
            list.remove_at(0),
            Err(ListError::IndexOutOfRange { index: 0, len: 1 })
        );
        assert_eq!(
            list.remove_at(2),
            Err(ListError::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_reverse() {
        let mut list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        list.reverse();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&4, &3, &2, &1]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.reverse();
        assert!(list.is_empty());

        list.push_back(1);
        list.reverse();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1]);
    }

    #[test]
    fn test_into_iter() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let vec: Vec<i32> = list.into_iter().collect();
        assert_eq!(vec, vec![1, 2, 3]);
    }

    #[test]
    fn test_display() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "1 2 3");

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_front_and_clear() {
        let mut list: LinkedList<i32> = [5, 6].into_iter().collect();
        assert_eq!(list.front(), Some(&5));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_mixed_operations() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_back(2);
        list.push_front(0);
        list.push_back(3);

        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&0, &1, &2, &3]);

        assert_eq!(list.remove_at(1), Ok(0));
        assert_eq!(list.remove_at(list.len()), Ok(3));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2]);
    }

    #[test]
    fn test_drop_long_chain() {
        let mut list = LinkedList::new();
        for i in 0..100_000 {
            list.push_front(i);
        }
        // Teardown is iterative via the arena, not recursive per node.
    }
}
