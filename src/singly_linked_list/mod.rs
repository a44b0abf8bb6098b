use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::error::{present, Error, Result};
use crate::sequence::Sequence;

mod sort;

/// The `SinglyLinkedList` is a forward-only chain of owned nodes.
///
/// The list keeps only its head node and its length. Every positional
/// operation walks the chain from the head, so accessing, inserting or
/// removing at position *i* takes *O*(*i*) time; in particular appending and
/// removing the last element take *O*(*n*) time.
///
/// ```text
///   ╔══════════╗      ┌───────────┐      ┌───────────┐
///   ║   head   ║ ───→ │   next    │ ───→ │   next    │ ───→ None
///   ╟──────────╢      ├───────────┤      ├───────────┤
///   ║   len    ║      │ element T │      │ element T │
///   ╚══════════╝      └───────────┘      └───────────┘
///       List              Node 0             Node 1
/// ```
///
/// Each node owns the next one, so ownership flows from the head to the tail.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

// private methods
impl<T> SinglyLinkedList<T> {
    /// Returns the link that points to the node at `index`, that is, `head`
    /// for index 0, or the `next` of the node at `index - 1`.
    ///
    /// Returns `None` if `index > len`.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Unlink the node at `index` and return its element, or return `None`
    /// if `index >= len`.
    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link_mut(index)?;
        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.element)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.element)
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty `SinglyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linear_lists::{Sequence, SinglyLinkedList};
    /// let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{Error, Sequence, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from_iter([1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(*list.to_array(), [1, 2, 3]);
    /// assert_eq!(list.insert(5, 4), Err(Error::IndexOutOfBounds { index: 5, len: 3 }));
    /// ```
    fn insert<I>(&mut self, index: usize, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let element = present(item)?;
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        let len = self.len;
        let link = self
            .link_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        let next = link.take();
        *link = Some(Box::new(Node { element, next }));
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let len = self.len;
        self.unlink(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn remove_first(&mut self) -> Option<T> {
        self.unlink(0)
    }

    fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.unlink(last)
    }

    fn remove_item(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|e| e == item)?;
        self.unlink(index);
        Some(index)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == item)
    }

    fn peek(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn peek_first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    fn peek_last(&self) -> Option<&T> {
        self.iter().last()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Sort the list in place with a merge sort over its nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time. Nodes are
    /// relinked, never reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{Sequence, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from_iter([-5i32, 4, 1, -3, 2]);
    /// list.sort_by(|a, b| a.abs().cmp(&b.abs()));
    /// assert_eq!(*list.to_array(), [1, 2, -3, 4, -5]);
    /// ```
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let head = self.head.take();
        self.head = sort::merge_sort(head, &mut compare);
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

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for element in iter {
            tail = &mut tail.insert(Box::new(Node { element, next: None })).next;
            list.len += 1;
        }
        list
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
