use crate::error::Result;
use std::cmp::Ordering;

/// The operations shared by every list in this crate.
///
/// [`ArrayList`], [`SinglyLinkedList`] and [`DoublyLinkedList`] implement the
/// same contract, so that code (and tests) written against `Sequence` can
/// drive any of them and observe the same results through [`size`] and
/// [`to_array`]. They differ only in the cost of each operation.
///
/// # Absent values
///
/// Insertion-style operations take `impl Into<Option<T>>`: a plain `T` is
/// inserted, and `None` is rejected with [`Error::InvalidArgument`].
///
/// Accessors that tolerate an empty list ([`remove_first`], [`remove_last`],
/// [`peek_first`], [`peek_last`]) return `None` instead of failing, whereas
/// their indexed counterparts fail with [`Error::IndexOutOfBounds`].
///
/// # Examples
///
/// ```
/// use linear_lists::{ArrayList, DoublyLinkedList, Sequence, SinglyLinkedList};
///
/// fn fill<S: Sequence<i32>>(mut seq: S) -> Box<[i32]> {
///     seq.append(3).unwrap();
///     seq.prepend(1).unwrap();
///     seq.insert(1, 2).unwrap();
///     assert!(seq.append(None::<i32>).is_err());
///     seq.to_array()
/// }
///
/// assert_eq!(*fill(ArrayList::new()), [1, 2, 3]);
/// assert_eq!(*fill(SinglyLinkedList::new()), [1, 2, 3]);
/// assert_eq!(*fill(DoublyLinkedList::new()), [1, 2, 3]);
/// ```
///
/// [`ArrayList`]: crate::ArrayList
/// [`SinglyLinkedList`]: crate::SinglyLinkedList
/// [`DoublyLinkedList`]: crate::DoublyLinkedList
/// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
/// [`Error::IndexOutOfBounds`]: crate::Error::IndexOutOfBounds
/// [`size`]: Sequence::size
/// [`to_array`]: Sequence::to_array
/// [`remove_first`]: Sequence::remove_first
/// [`remove_last`]: Sequence::remove_last
/// [`peek_first`]: Sequence::peek_first
/// [`peek_last`]: Sequence::peek_last
pub trait Sequence<T> {
    /// Insert `item` so that it becomes the element at `index`, shifting the
    /// elements from `index` on by one.
    ///
    /// Fails with `InvalidArgument` if `item` is `None`, or with
    /// `IndexOutOfBounds` if `index > size`.
    fn insert<I>(&mut self, index: usize, item: I) -> Result<()>
    where
        I: Into<Option<T>>;

    /// Insert `item` at the back. Equivalent to `insert(size, item)`.
    fn append<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let len = self.size();
        self.insert(len, item)
    }

    /// Insert `item` at the front. Equivalent to `insert(0, item)`.
    fn prepend<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        self.insert(0, item)
    }

    /// Remove and return the element at `index`, shifting the following
    /// elements down by one.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= size`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Remove and return the first element, or `None` if the list is empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Remove and return the last element, or `None` if the list is empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Remove the first element equal to `item`, returning the index it held,
    /// or `None` (leaving the list untouched) if there is no such element.
    fn remove_item(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` if the list contains an element equal to `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Returns the element at `index`.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= size`.
    fn peek(&self, index: usize) -> Result<&T>;

    /// Returns the first element, or `None` if the list is empty.
    fn peek_first(&self) -> Option<&T>;

    /// Returns the last element, or `None` if the list is empty.
    fn peek_last(&self) -> Option<&T>;

    /// Returns the number of elements, in *O*(1) time.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Sort the list in place so that no two adjacent elements compare
    /// `Greater`. The sort is not stable.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort the list in place by the natural order of its elements.
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Returns a sorted copy of the list, leaving the list itself untouched.
    fn sorted_by<F>(&self, compare: F) -> Self
    where
        Self: Sized,
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    /// Returns a copy of the list sorted by the natural order of its elements.
    fn sorted(&self) -> Self
    where
        Self: Sized,
        T: Clone + Ord,
    {
        self.sorted_by(T::cmp)
    }

    /// Returns the elements from front to back.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;
}

/// A behavioral suite every `Sequence` implementation runs.
#[cfg(test)]
pub(crate) mod tests {
    use super::Sequence;
    use crate::Error;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::fmt::Debug;

    pub(crate) fn check_all<S>()
    where
        S: Sequence<i32> + Default + Debug + Clone + PartialEq + FromIterator<i32>,
    {
        append_round_trip::<S>();
        insert_and_remove::<S>();
        boundaries::<S>();
        absent_items::<S>();
        remove_item::<S>();
        sort_and_sorted::<S>();
        matches_reference::<S>(11);
        matches_reference::<S>(42);
    }

    fn append_round_trip<S>()
    where
        S: Sequence<i32> + Default,
    {
        let mut seq = S::default();
        seq.append(1).unwrap();
        seq.append(2).unwrap();
        seq.append(3).unwrap();
        assert_eq!(*seq.to_array(), [1, 2, 3]);
        assert_eq!(seq.size(), 3);
        assert_eq!(seq.peek_first(), Some(&1));
        assert_eq!(seq.peek_last(), Some(&3));
    }

    fn insert_and_remove<S>()
    where
        S: Sequence<i32> + FromIterator<i32>,
    {
        let mut seq = S::from_iter(0..5);
        seq.insert(2, 10).unwrap();
        assert_eq!(*seq.to_array(), [0, 1, 10, 2, 3, 4]);
        seq.prepend(-1).unwrap();
        assert_eq!(*seq.to_array(), [-1, 0, 1, 10, 2, 3, 4]);
        seq.insert(7, 20).unwrap();
        assert_eq!(*seq.to_array(), [-1, 0, 1, 10, 2, 3, 4, 20]);
        assert_eq!(seq.peek(3), Ok(&10));

        assert_eq!(seq.remove(3), Ok(10));
        assert_eq!(seq.remove(0), Ok(-1));
        assert_eq!(seq.remove(5), Ok(20));
        assert_eq!(*seq.to_array(), [0, 1, 2, 3, 4]);
        assert_eq!(seq.remove_first(), Some(0));
        assert_eq!(seq.remove_last(), Some(4));
        assert_eq!(*seq.to_array(), [1, 2, 3]);
        assert_eq!(seq.size(), 3);
        assert!(seq.contains(&2));
        assert!(!seq.contains(&4));
    }

    fn boundaries<S>()
    where
        S: Sequence<i32> + Default,
    {
        let mut seq = S::default();
        assert!(seq.is_empty());
        assert_eq!(seq.peek(0), Err(Error::IndexOutOfBounds { index: 0, len: 0 }));
        assert_eq!(seq.remove(0), Err(Error::IndexOutOfBounds { index: 0, len: 0 }));
        assert_eq!(seq.remove_first(), None);
        assert_eq!(seq.remove_last(), None);
        assert_eq!(seq.peek_first(), None);
        assert_eq!(seq.peek_last(), None);
        assert_eq!(seq.insert(1, 5), Err(Error::IndexOutOfBounds { index: 1, len: 0 }));

        seq.insert(0, 5).unwrap();
        seq.insert(1, 6).unwrap();
        assert_eq!(seq.insert(3, 7), Err(Error::IndexOutOfBounds { index: 3, len: 2 }));
        assert_eq!(seq.peek(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
        assert_eq!(seq.remove(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
        assert_eq!(*seq.to_array(), [5, 6]);
    }

    fn absent_items<S>()
    where
        S: Sequence<i32> + FromIterator<i32>,
    {
        let mut seq = S::from_iter([1, 2]);
        assert_eq!(seq.insert(0, None::<i32>), Err(Error::InvalidArgument));
        assert_eq!(seq.insert(9, None::<i32>), Err(Error::InvalidArgument));
        assert_eq!(seq.append(None::<i32>), Err(Error::InvalidArgument));
        assert_eq!(seq.prepend(None::<i32>), Err(Error::InvalidArgument));
        assert_eq!(seq.append(Some(3)), Ok(()));
        assert_eq!(*seq.to_array(), [1, 2, 3]);
    }

    fn remove_item<S>()
    where
        S: Sequence<i32> + FromIterator<i32>,
    {
        let mut seq = S::from_iter([4, 7, 4, 9, 1]);
        assert_eq!(seq.remove_item(&5), None);
        assert_eq!(seq.size(), 5);
        assert_eq!(*seq.to_array(), [4, 7, 4, 9, 1]);

        assert_eq!(seq.remove_item(&4), Some(0));
        assert_eq!(*seq.to_array(), [7, 4, 9, 1]);
        assert_eq!(seq.remove_item(&1), Some(3));
        assert_eq!(*seq.to_array(), [7, 4, 9]);
        assert_eq!(seq.remove_item(&4), Some(1));
        assert_eq!(*seq.to_array(), [7, 9]);
        assert_eq!(seq.remove_item(&7), Some(0));
        assert_eq!(seq.remove_item(&9), Some(0));
        assert!(seq.is_empty());
        assert_eq!(seq.remove_item(&9), None);
    }

    fn sort_and_sorted<S>()
    where
        S: Sequence<i32> + Debug + PartialEq + FromIterator<i32>,
    {
        let original = [5, -2, 9, 0, 5, 3, -7, 1];
        let mut seq = S::from_iter(original);

        let sorted = seq.sorted_by(|a, b| b.cmp(a));
        assert_eq!(*seq.to_array(), original);
        let out = sorted.to_array();
        assert!(out.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sorted.size(), original.len());

        seq.sort();
        let once = seq.to_array();
        assert_eq!(*once, [-7, -2, 0, 1, 3, 5, 5, 9]);
        seq.sort();
        assert_eq!(seq.to_array(), once);
        assert_eq!(seq.sorted(), seq);

        let mut single = S::from_iter([1]);
        single.sort_by(|a, b| b.cmp(a));
        assert_eq!(*single.to_array(), [1]);
        let mut empty = S::from_iter(std::iter::empty());
        empty.sort();
        assert!(empty.is_empty());
    }

    /// Drive the sequence and a `Vec` with the same random operations and
    /// compare them after each step.
    fn matches_reference<S>(seed: u64)
    where
        S: Sequence<i32> + Default + Debug + Clone + PartialEq,
    {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut seq = S::default();
        let mut reference = Vec::new();
        for _ in 0..400 {
            match rng.gen_range(0..8) {
                0 | 1 => {
                    let item = rng.gen_range(0..20);
                    let index = rng.gen_range(0..=reference.len());
                    seq.insert(index, item).unwrap();
                    reference.insert(index, item);
                }
                2 => {
                    let item = rng.gen_range(0..20);
                    seq.append(item).unwrap();
                    reference.push(item);
                }
                3 if !reference.is_empty() => {
                    let index = rng.gen_range(0..reference.len());
                    assert_eq!(seq.remove(index), Ok(reference.remove(index)));
                }
                4 => {
                    let item = rng.gen_range(0..20);
                    let expected = reference.iter().position(|x| *x == item);
                    if let Some(index) = expected {
                        reference.remove(index);
                    }
                    assert_eq!(seq.remove_item(&item), expected);
                }
                5 => {
                    let expected = (!reference.is_empty()).then(|| reference.remove(0));
                    assert_eq!(seq.remove_first(), expected);
                }
                6 => assert_eq!(seq.remove_last(), reference.pop()),
                _ => {
                    let copy = seq.clone();
                    seq.sort_by(|a, b| b.cmp(a));
                    reference.sort_by(|a, b| b.cmp(a));
                    assert_eq!(copy.sorted_by(|a, b| b.cmp(a)), seq);
                }
            }
            assert_eq!(seq.size(), reference.len());
            assert_eq!(*seq.to_array(), *reference);
            assert_eq!(seq.peek_first(), reference.first());
            assert_eq!(seq.peek_last(), reference.last());
        }
    }
}
