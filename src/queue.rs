use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{present, Error, Result};

/// The `Queue` is a first-in, first-out chain of nodes.
///
/// Elements are enqueued at the tail and dequeued from the head, both in
/// *O*(1) time.
///
/// ```text
///   ╔══════════╗     ┌───────────┐      ┌───────────┐      ┌───────────┐
///   ║   head   ║ ──→ │   next    │ ───→ │   next    │ ───→ │   next    │ ──→ None
///   ╟──────────╢     ├───────────┤      ├───────────┤      ├───────────┤
///   ║   tail   ║ ─┐  │ element T │      │ element T │      │ element T │
///   ╚══════════╝  │  └───────────┘      └───────────┘      └───────────┘
///      Queue      │     dequeue                                 ↑ enqueue
///                 └─────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use linear_lists::{Error, Queue};
///
/// let mut queue = Queue::new();
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek(), Ok(&2));
/// assert!(!queue.is_empty());
///
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
/// ```
pub struct Queue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    element: T,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Add an element at the tail of the queue.
    ///
    /// Fails with [`Error::InvalidArgument`] if `item` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{Error, Queue};
    ///
    /// let mut queue: Queue<u8> = Queue::new();
    /// assert_eq!(queue.enqueue(None::<u8>), Err(Error::InvalidArgument));
    /// assert!(queue.is_empty());
    /// ```
    pub fn enqueue<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let element = present(item)?;
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })));
        match self.tail {
            // SAFETY: `tail` is the last node of the queue.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Remove the element at the head of the queue and return it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyContainer)?;
        // SAFETY: `head` was leaked from a box by `enqueue` and is owned by
        // the queue alone.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.element)
    }

    /// Returns the element at the head of the queue without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        let head = self.head.ok_or(Error::EmptyContainer)?;
        // SAFETY: `head` is a node of the queue, borrowed as long as the queue.
        Ok(unsafe { &(*head.as_ptr()).element })
    }

    /// Returns `true` if the queue holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        // SAFETY: every node reached from `head` is a node of the queue.
        std::iter::successors(self.head, |node| unsafe { node.as_ref().next })
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}

static_assertions::assert_impl_all!(Queue<u8>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::Queue;
    use crate::Error;
    use std::cell::RefCell;

    #[test]
    fn queue_fifo_order() {
        let mut queue = Queue::<i32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), Err(Error::EmptyContainer));
        assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));

        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(format!("{:?}", queue), "[0, 1, 2, 3, 4]");
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));

        queue.enqueue(5).unwrap();
        assert_eq!(queue.peek(), Ok(&2));
        let rest: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(rest, [2, 3, 4, 5]);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_refill_after_empty() {
        let mut queue = Queue::new();
        queue.enqueue('a').unwrap();
        assert_eq!(queue.dequeue(), Ok('a'));
        assert!(queue.tail.is_none());
        queue.enqueue('b').unwrap();
        queue.enqueue('c').unwrap();
        assert_eq!(queue.peek(), Ok(&'b'));
        assert_eq!(queue.dequeue(), Ok('b'));
        assert_eq!(queue.dequeue(), Ok('c'));
    }

    #[test]
    fn queue_absent_item() {
        let mut queue = Queue::new();
        queue.enqueue("x").unwrap();
        assert_eq!(queue.enqueue(None::<&str>), Err(Error::InvalidArgument));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&"x"));
    }

    #[test]
    fn queue_drop() {
        struct DropChecker<'a>(i32, &'a RefCell<Vec<i32>>);
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut queue = Queue::new();
        for i in 1..=3 {
            queue.enqueue(DropChecker(i, &dropped)).unwrap();
        }
        drop(queue.dequeue());
        drop(queue);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn queue_long_chain_drop() {
        let mut queue = Queue::new();
        for i in 0..200_000u32 {
            queue.enqueue(i).unwrap();
        }
        drop(queue);
    }
}
