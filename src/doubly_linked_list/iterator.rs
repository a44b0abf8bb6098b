use super::{DoublyLinkedList, Node};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `DoublyLinkedList`.
///
/// `front` and `back` are the next nodes to be yielded from either end, and
/// `len` counts the nodes between them (inclusive), so the two ends never
/// cross.
///
/// Though the `Iter` does not hold a reference to the list, it borrows
/// (immutably) from the list, so a phantom marker of
/// `&'a DoublyLinkedList<T>` keeps the list from being written.
#[derive(Clone)]
pub(crate) struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(
        front: Option<NonNull<Node<T>>>,
        back: Option<NonNull<Node<T>>>,
        len: usize,
    ) -> Self {
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and move `front` to `front.next`, or return `None` if
    /// the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a node of the borrowed list.
        let current = unsafe { self.front?.as_ref() };
        self.front = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and move `back` to `back.prev`, or return `None` if
    /// the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `back` is a node of the borrowed list.
        let current = unsafe { self.back?.as_ref() };
        self.back = current.prev;
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}
