//! This crate provides the classic linear data structures: three lists that
//! share one [`Sequence`] contract, a FIFO [`Queue`], and two LIFO stacks that
//! share one [`Stack`] contract.
//!
//! The lists differ only in their storage and in the cost of each operation:
//! - [`ArrayList`] keeps its elements in one contiguous buffer that doubles
//!   when full, and sorts with a quicksort;
//! - [`SinglyLinkedList`] is a forward-only chain of owned nodes, sorted with a
//!   merge sort that relinks nodes;
//! - [`DoublyLinkedList`] keeps both ends and links nodes in both directions,
//!   sorted with a bubble sort that swaps elements between nodes.
//!
//! Here is a quick example showing how the lists can be interchanged.
//!
//! ```
//! use linear_lists::{ArrayList, DoublyLinkedList, Sequence, SinglyLinkedList};
//!
//! fn demo<S: Sequence<i32> + FromIterator<i32>>() -> Box<[i32]> {
//!     let mut list = S::from_iter([4, 7, 4, 9]);
//!     list.prepend(1).unwrap();
//!     assert_eq!(list.remove_item(&4), Some(1)); // the first match from the front
//!     assert_eq!(list.remove_item(&5), None);
//!     list.sort();
//!     list.to_array()
//! }
//!
//! assert_eq!(*demo::<ArrayList<_>>(), [1, 4, 7, 9]);
//! assert_eq!(*demo::<SinglyLinkedList<_>>(), [1, 4, 7, 9]);
//! assert_eq!(*demo::<DoublyLinkedList<_>>(), [1, 4, 7, 9]);
//! ```
//!
//! # Memory Layout
//!
//! The `ArrayList` (like the [`ArrayStack`]) owns one buffer of `capacity`
//! slots, of which the first `len` hold elements:
//! ```text
//!   ╔══════════╗      ┌─────┬─────┬─────┬─────┬╌╌╌╌╌┬╌╌╌╌╌┐
//!   ║  buffer  ║ ───→ │  0  │  1  │  2  │  3  ┊     ┊     ┊
//!   ╟──────────╢      └─────┴─────┴─────┴─────┴╌╌╌╌╌┴╌╌╌╌╌┘
//!   ║   len    ║       ←──────── len ────────→
//!   ╚══════════╝       ←────────────── capacity ───────────→
//!    ArrayList
//! ```
//!
//! The linked structures allocate each node on the heap. In the
//! `DoublyLinkedList`, `next` owns the following node, while `prev` is only a
//! back-pointer kept in lockstep with `next`:
//! ```text
//!   ╔══════════╗     ┌───────────┐      ┌───────────┐      ┌───────────┐
//!   ║   head   ║ ──→ │   next    │ ───→ │   next    │ ───→ │   next    │ ──→ None
//!   ╟──────────╢     ├───────────┤      ├───────────┤      ├───────────┤
//!   ║   tail   ║ ─┐  │   prev    │ ←┄┄┄ │   prev    │ ←┄┄┄ │   prev    │
//!   ╟──────────╢  │  ├───────────┤      ├───────────┤      ├───────────┤
//!   ║   len    ║  │  │ element T │      │ element T │      │ element T │
//!   ╚══════════╝  │  └───────────┘      └───────────┘      └───────────┘
//!                 └─────────────────────────────────────────────┘
//! ```
//!
//! # Absent Values
//!
//! Operations that insert an element take `impl Into<Option<T>>`, so both `x`
//! and `Some(x)` are accepted, and `None` is rejected with
//! [`Error::InvalidArgument`]. Lookups that may find nothing return `Option`
//! rather than a sentinel element.
//!
//! ```
//! use linear_lists::{Error, LinkedStack, Queue, Stack};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.peek(), Ok(&2));
//!
//! let mut stack: LinkedStack<i32> = LinkedStack::new();
//! stack.push(Some(1)).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.push(None::<i32>), Err(Error::InvalidArgument));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.peek(), Ok(&1));
//! ```
//!
//! # Algorithms
//!
//! The sorting algorithms behind the lists are also available on slices and
//! vectors in the [`sort`] module.

#[doc(inline)]
pub use array_list::ArrayList;
#[doc(inline)]
pub use doubly_linked_list::DoublyLinkedList;
pub use error::{Error, Result};
pub use queue::Queue;
pub use sequence::Sequence;
#[doc(inline)]
pub use singly_linked_list::SinglyLinkedList;
pub use stack::{ArrayStack, LinkedStack, Stack};

pub mod array_list;
pub mod doubly_linked_list;
pub mod error;
pub mod queue;
pub mod sequence;
pub mod singly_linked_list;
pub mod sort;
pub mod stack;

mod buffer;
