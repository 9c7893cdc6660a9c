//! A single threaded, arena-backed singly linked list.
//!
//! [`LinkedList`] supports insertion at the front, back, or any 1-based
//! position, positional removal, in-place reversal, O(1) length queries, and
//! forward iteration. Nodes are stored in a slab-style arena and linked by
//! stable indices, so the whole structure is safe Rust and teardown never
//! recurses down the chain.
//!
//! Positional operations are **1-based**: the first element is position 1,
//! and `insert_at(len() + 1, v)` appends. Out-of-range positions are rejected
//! with [`ListError::IndexOutOfRange`] before any mutation happens.
//!
//! ```
//! use slink::LinkedList;
//!
//! let mut list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
//! list.insert_at(2, 9)?;
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);
//!
//! assert_eq!(list.remove_at(2)?, 9);
//! list.reverse();
//! assert_eq!(list.to_string(), "3 2 1");
//! assert_eq!(list.len(), 3);
//! # Ok::<(), slink::ListError>(())
//! ```

mod arena;
mod node;

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::{IntoIter, Iter, LinkedList};
