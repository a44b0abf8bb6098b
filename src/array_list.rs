use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::buffer::{Buffer, DEFAULT_CAPACITY};
use crate::error::{present, Error, Result};
use crate::sequence::Sequence;
use crate::sort::quick_sort_by;

/// The `ArrayList` is a list stored in one contiguous, growable buffer.
///
/// Indexed access is *O*(1). Inserting or removing at position *i* moves the
/// elements behind it one slot at a time, so it takes *O*(*n* - *i*) time;
/// appending and removing the last element are *O*(1) (amortized).
///
/// When an insertion finds the buffer full, its capacity doubles.
///
/// # Examples
///
/// ```
/// use linear_lists::{ArrayList, Sequence};
///
/// let mut list = ArrayList::with_capacity(2);
/// list.append(1).unwrap();
/// list.append(2).unwrap();
/// assert_eq!(list.capacity(), 2);
///
/// list.append(3).unwrap(); // the buffer doubles
/// assert_eq!(list.capacity(), 4);
/// assert_eq!(*list.to_array(), [1, 2, 3]);
///
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(*list.to_array(), [1, 3]);
/// ```
pub struct ArrayList<T> {
    buffer: Buffer<T>,
    /// the slots `0..len` of `buffer` are initialized
    len: usize,
}

// private methods
impl<T> ArrayList<T> {
    fn reserve_one(&mut self) {
        if self.len == self.buffer.capacity() {
            self.buffer.grow();
        }
    }

    /// Insert `element` at `index`, which must be `<= len`.
    ///
    /// The element is written behind the last live element, then moves down
    /// one slot at a time until it reaches `index`.
    fn insert_element(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len);
        self.reserve_one();
        // SAFETY: `len < capacity` after `reserve_one`, and the slot `len` is
        // uninitialized.
        unsafe { self.buffer.write(self.len, element) };
        for slot in (index..self.len).rev() {
            self.buffer.swap(slot, slot + 1);
        }
        self.len += 1;
    }

    /// Remove the element at `index`, which must be `< len`.
    ///
    /// The element moves up one slot at a time to the last live slot, and is
    /// read out of it.
    fn remove_element(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        for slot in index..self.len - 1 {
            self.buffer.swap(slot, slot + 1);
        }
        self.len -= 1;
        // SAFETY: the slot `len` was the last live slot, and is treated as
        // uninitialized from now on.
        unsafe { self.buffer.take(self.len) }
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<T> ArrayList<T> {
    /// Create an empty `ArrayList` with the default capacity of 10.
    ///
    /// # Examples
    /// ```
    /// use linear_lists::ArrayList;
    /// let list: ArrayList<u32> = ArrayList::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty `ArrayList` whose buffer holds `capacity` elements
    /// before it needs to grow.
    ///
    /// # Examples
    /// ```
    /// use linear_lists::{ArrayList, Sequence};
    ///
    /// let mut list = ArrayList::with_capacity(0);
    /// assert_eq!(list.capacity(), 0);
    /// list.append('a').unwrap();
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements the buffer holds before it grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the live elements as a slice.
    ///
    /// # Examples
    /// ```
    /// use linear_lists::ArrayList;
    ///
    /// let list = ArrayList::from_iter([1, 2, 3]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the slots `0..len` are initialized.
        unsafe { self.buffer.prefix(self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the slots `0..len` are initialized.
        unsafe { self.buffer.prefix_mut(self.len) }
    }
}

impl<T> Sequence<T> for ArrayList<T> {
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
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.remove_element(index))
    }

    fn remove_first(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.remove_element(0))
    }

    fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        Some(self.remove_element(last))
    }

    fn remove_item(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let index = self.as_slice().iter().position(|e| e == item)?;
        self.remove_element(index);
        Some(index)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    fn peek(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn peek_first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn peek_last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Sort the list in place with [`quick_sort_by`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time on average,
    /// and *O*(*n*<sup>2</sup>) time in the worst case (an already sorted list).
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_lists::{ArrayList, Sequence};
    ///
    /// let mut list = ArrayList::from_iter([5, 2, 4, 3, 1]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.as_slice(), &[5, 4, 3, 2, 1]);
    /// ```
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort_by(self.as_mut_slice(), compare);
    }

    fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = Self::with_capacity(self.len);
        for element in self.as_slice() {
            sorted.insert_element(sorted.len, element.clone());
        }
        sorted.sort_by(compare);
        sorted
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        Box::from(self.as_slice())
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.capacity());
        for element in self.as_slice() {
            list.insert_element(list.len, element.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0.max(DEFAULT_CAPACITY));
        for element in iter {
            list.insert_element(list.len, element);
        }
        list
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY: the slots `0..len` are initialized, and never read again.
        unsafe { self.buffer.drop_prefix(self.len) }
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayList;
    use crate::{Error, Sequence};
    use std::cell::RefCell;

    #[test]
    fn array_list_contract() {
        crate::sequence::tests::check_all::<ArrayList<i32>>();
    }

    #[test]
    fn array_list_doubling() {
        let mut list = ArrayList::with_capacity(2);
        list.append(1).unwrap();
        list.append(2).unwrap();
        assert_eq!(list.capacity(), 2);
        list.append(3).unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(*list.to_array(), [1, 2, 3]);
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(*list.to_array(), [1, 3]);

        for i in 0..6 {
            list.prepend(i).unwrap();
        }
        assert_eq!(list.size(), 8);
        assert_eq!(list.capacity(), 8);
        list.insert(4, 9).unwrap();
        assert_eq!(list.capacity(), 16);
        assert_eq!(list.as_slice(), &[5, 4, 3, 2, 9, 1, 0, 1, 3]);
    }

    #[test]
    fn array_list_failures_do_not_mutate() {
        let mut list = ArrayList::with_capacity(1);
        list.append("a").unwrap();
        assert_eq!(list.insert(0, None::<&str>), Err(Error::InvalidArgument));
        assert_eq!(
            list.insert(2, "b"),
            Err(Error::IndexOutOfBounds { index: 2, len: 1 })
        );
        assert_eq!(list.capacity(), 1);
        assert_eq!(list.as_slice(), &["a"]);
    }

    #[test]
    fn array_list_sorted_keeps_original() {
        let list = ArrayList::from_iter(["d", "a", "c", "b"]);
        let sorted = list.sorted();
        assert_eq!(sorted.as_slice(), &["a", "b", "c", "d"]);
        assert_eq!(sorted.capacity(), 4);
        assert_eq!(list.as_slice(), &["d", "a", "c", "b"]);
    }

    #[test]
    fn array_list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = ArrayList::with_capacity(1);
        for value in 1..=4 {
            list.append(DropChecker {
                value,
                dropped: &dropped,
            })
            .unwrap();
        }
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.value, 2);
        assert!(dropped.borrow().is_empty());
        drop(removed);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3, 4]);
    }
}
