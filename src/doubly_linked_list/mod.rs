use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{present, Error, Result};
use crate::sequence::Sequence;

mod iterator;
mod sort;

use iterator::Iter;

/// The `DoublyLinkedList` is a chain of owned nodes linked in both
/// directions, with entry points at both ends.
///
/// Pushing and popping at either end take *O*(1) time. Accessing, inserting
/// or removing at position *i* walks from the nearer end, taking
/// *O*(min(*i*, *n* - *i*)) time.
///
/// The memory layout of the list is like the following graph:
/// ```text
///   ╔══════════╗     ┌───────────┐      ┌───────────┐      ┌───────────┐
///   ║   head   ║ ──→ │   next    │ ───→ │   next    │ ───→ │   next    │ ──→ None
///   ╟──────────╢     ├───────────┤      ├───────────┤      ├───────────┤
///   ║   tail   ║ ─┐  │   prev    │ ←┄┄┄ │   prev    │ ←┄┄┄ │   prev    │
///   ╟──────────╢  │  ├───────────┤      ├───────────┤      ├───────────┤
///   ║   len    ║  │  │ element T │      │ element T │      │ element T │
///   ╚══════════╝  │  └───────────┘      └───────────┘      └───────────┘
///       List      │      Node 0  ┆          Node 1              ↑
///                 │              └┄┄→ None                      │
///                 └─────────────────────────────────────────────┘
/// ```
///
/// The list owns every node: `next` is the owning direction, and `prev` is a
/// back-pointer kept in lockstep with `next` by every mutation. For every two
/// adjacent nodes `a` and `b`, `a.next == b` and `b.prev == a`; `head.prev`
/// and `tail.next` are always `None`, and `head` and `tail` are `None`
/// exactly when the list is empty.
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> DoublyLinkedList<T> {
    /// Make `prev` and `next` adjacent. A `None` end stands for the list
    /// boundary, so `head` or `tail` is updated instead.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list. Nodes between them, if any, are not freed.
    unsafe fn connect(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) {
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attach a single detached node `node` to the list, between `prev` and
    /// `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    unsafe fn attach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this function call makes the list ill-formed.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_adjacent(node.prev, node.next);
        node
    }

    /// Returns the node at `index`, walking from the nearer end, or `None`
    /// if `index >= len`.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index < len`, so every step lands on a node of the list.
        unsafe {
            if index <= self.len / 2 {
                let mut node = self.head?;
                for _ in 0..index {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in index + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    fn insert_element(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len);
        let (prev, next) = match self.node_at(index) {
            // SAFETY: `next` is a node of the list.
            Some(next) => (unsafe { next.as_ref().prev }, Some(next)),
            None => (self.tail, None),
        };
        // SAFETY: `prev` and `next` are adjacent nodes (or ends) of the list.
        unsafe { self.attach_node(prev, next, new_node(element)) }
    }

    /// Unlink `node` and return its element.
    ///
    /// It is unsafe because `node` must belong to the list.
    unsafe fn remove_node(&mut self, node: NonNull<Node<T>>) -> T {
        self.detach_node(node).element
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.tail, self.len)
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NonNull<Node<T>>>, next: Option<NonNull<Node<T>>>) {
        unsafe {
            match prev {
                Some(prev) => assert_eq!(prev.as_ref().next, next),
                None => assert_eq!(self.head, next),
            }
            match next {
                Some(next) => assert_eq!(next.as_ref().prev, prev),
                None => assert_eq!(self.tail, prev),
            }
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linear_lists::{DoublyLinkedList, Sequence};
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    /// Inserting at either end takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{DoublyLinkedList, Sequence};
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3, 5, 6]);
    /// list.insert(3, 4).unwrap();
    /// list.prepend(0).unwrap();
    /// list.append(7).unwrap();
    /// assert_eq!(*list.to_array(), [0, 1, 2, 3, 4, 5, 6, 7]);
    /// ```
    fn insert<I>(&mut self, index: usize, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let element = present(item)?;
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        self.insert_element(index, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        // SAFETY: `node` is a node of the list.
        Ok(unsafe { self.remove_node(node) })
    }

    fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is a node of the list.
        Some(unsafe { self.remove_node(head) })
    }

    fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is a node of the list.
        Some(unsafe { self.remove_node(tail) })
    }

    /// Checks the head, then the interior nodes from front to back, then the
    /// tail. Removing the head or the tail takes *O*(1) time; an interior
    /// match is unlinked in place by stitching its neighbors together.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{DoublyLinkedList, Sequence};
    ///
    /// let mut list = DoublyLinkedList::from_iter(['a', 'b', 'c', 'b']);
    /// assert_eq!(list.remove_item(&'b'), Some(1));
    /// assert_eq!(list.remove_item(&'b'), Some(2));
    /// assert_eq!(list.remove_item(&'z'), None);
    /// assert_eq!(*list.to_array(), ['a', 'c']);
    /// ```
    fn remove_item(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let (head, tail) = (self.head?, self.tail?);
        // SAFETY: every node visited is reached from `head` before `tail`,
        // so it belongs to the list.
        unsafe {
            if head.as_ref().element == *item {
                self.remove_node(head);
                return Some(0);
            }
            let mut index = 1;
            let mut current = head.as_ref().next;
            while let Some(node) = current.filter(|&node| node != tail) {
                if node.as_ref().element == *item {
                    self.remove_node(node);
                    return Some(index);
                }
                index += 1;
                current = node.as_ref().next;
            }
            if head != tail && tail.as_ref().element == *item {
                self.remove_node(tail);
                return Some(self.len);
            }
        }
        None
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == item)
    }

    fn peek(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        // SAFETY: `node` is a node of the list, borrowed as long as the list.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    fn peek_first(&self) -> Option<&T> {
        self.iter().next()
    }

    fn peek_last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Sort the list in place with bubble sort, swapping the elements of
    /// adjacent nodes. The links between nodes never change.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*<sup>2</sup>) time and *O*(1)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{DoublyLinkedList, Sequence};
    ///
    /// let mut list = DoublyLinkedList::from_iter([5, 4, 1, 3, 2]);
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(*list.to_array(), [1, 2, 3, 4, 5]);
    /// ```
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::bubble_sort(self, &mut compare);
    }

    fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = self.clone();
        sorted.sort_by(compare);
        sorted
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            // SAFETY: `tail` and `None` are adjacent ends of the list.
            unsafe { list.attach_node(list.tail, None, new_node(element)) };
        }
        list
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

fn new_node<T>(element: T) -> NonNull<Node<T>> {
    NonNull::from(Box::leak(Box::new(Node {
        next: None,
        prev: None,
        element,
    })))
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

static_assertions::assert_impl_all!(DoublyLinkedList<u8>: Send, Sync);
static_assertions::assert_not_impl_any!(DoublyLinkedList<std::rc::Rc<u8>>: Send, Sync);

// Ensure that `DoublyLinkedList` is covariant in its type parameter.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyLinkedList<&'static str>) -> DoublyLinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}
