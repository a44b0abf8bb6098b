use std::fmt::{Debug, Formatter};

use super::Stack;
use crate::buffer::{Buffer, DEFAULT_CAPACITY};
use crate::error::{present, Error, Result};

/// A stack stored in one contiguous buffer.
///
/// `next` is the index of the next free slot: the slots `0..next` hold the
/// elements from the bottom to the top. The buffer doubles when a push finds
/// it full, so pushing is *O*(1) amortized.
///
/// # Examples
///
/// ```
/// use linear_lists::{ArrayStack, Stack};
///
/// let mut stack = ArrayStack::with_capacity(1);
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert_eq!(stack.capacity(), 2);
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.pop(), Ok('b'));
/// ```
pub struct ArrayStack<T> {
    buffer: Buffer<T>,
    next: usize,
}

impl<T> ArrayStack<T> {
    /// Create an empty `ArrayStack` with the default capacity of 10.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty `ArrayStack` whose buffer holds `capacity` elements
    /// before it needs to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(capacity),
            next: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.next
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let element = present(item)?;
        if self.next == self.buffer.capacity() {
            self.buffer.grow();
        }
        // SAFETY: `next < capacity`, and the slot `next` is free.
        unsafe { self.buffer.write(self.next, element) };
        self.next += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        let top = self.next.checked_sub(1).ok_or(Error::EmptyContainer)?;
        self.next = top;
        // SAFETY: the slot `top` was the last occupied slot, and is free from
        // now on.
        Ok(unsafe { self.buffer.take(top) })
    }

    fn peek(&self) -> Result<&T> {
        let top = self.next.checked_sub(1).ok_or(Error::EmptyContainer)?;
        // SAFETY: the slot `top` is occupied.
        Ok(unsafe { self.buffer.get(top) })
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.next == 0
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // SAFETY: the slots `0..next` are occupied.
        let elements = unsafe { self.buffer.prefix(self.next) };
        f.debug_list().entries(elements).finish()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayStack<T> {
    fn drop(&mut self) {
        // SAFETY: the slots `0..next` are occupied, and never read again.
        unsafe { self.buffer.drop_prefix(self.next) }
    }
}
