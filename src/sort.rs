//! Comparator-driven sorting of slices and vectors.
//!
//! These are the same algorithms the containers use on their own storage,
//! exposed on plain slices so that they can be used (and compared) on their
//! own. None of them is stable.
//!
//! Every comparator is a three-way comparison returning an [`Ordering`].

use std::cmp::Ordering;

/// Sort the slice in place with a quicksort whose partition rotates elements
/// behind a pivot fixed at the end of the range.
///
/// This is the algorithm behind [`ArrayList::sort_by`](crate::Sequence::sort_by).
///
/// # Partition
///
/// The pivot starts as the last element of the range, and `start` as its
/// first index. While the pivot is above `start`:
/// - if the pivot is greater than `v[start]`, `start` moves up;
/// - otherwise `v[start]` goes behind the pivot: the element just below the
///   pivot takes the place of `v[start]` and the pivot moves down one slot.
///
/// When the pivot meets `start` it sits at its final index, and both sides
/// are sorted recursively.
///
/// # Complexity
///
/// *O*(*n* * log(*n*)) comparisons on average, *O*(*n*<sup>2</sup>) for an
/// already sorted slice, which costs exactly *n* * (*n* - 1) / 2 comparisons.
///
/// # Examples
///
/// ```
/// use linear_lists::sort::quick_sort_by;
///
/// let mut v = [21, 4, 1, 3, 9, 20, 25, 6, 21, 14];
/// quick_sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 3, 4, 6, 9, 14, 20, 21, 21, 25]);
/// ```
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(v, &mut compare);
}

fn quick_sort_range<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The left side recurses, the right side loops, so that the comparator
    // sees the same sequence of calls as a left-then-right recursion.
    while v.len() > 1 {
        let pivot = rotate_partition(v, compare);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        quick_sort_range(left, compare);
        v = &mut right[1..];
    }
}

fn rotate_partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut start, mut pivot) = (0, v.len() - 1);
    while pivot > start {
        if compare(&v[pivot], &v[start]) == Ordering::Greater {
            start += 1;
        } else {
            // (start, pivot - 1, pivot) <- (pivot - 1, pivot, start)
            v.swap(start, pivot);
            v.swap(start, pivot - 1);
            pivot -= 1;
        }
    }
    pivot
}

/// Sort the slice in place with bubble sort.
///
/// Each pass walks from the front, swapping adjacent elements that compare
/// `Greater`, and is one element shorter than the previous pass since its
/// last element is then final. It always makes *n* * (*n* - 1) / 2
/// comparisons.
///
/// # Examples
///
/// ```
/// use linear_lists::sort::bubble_sort_by;
///
/// let mut v = ["pear", "fig", "apple"];
/// bubble_sort_by(&mut v, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(v, ["fig", "pear", "apple"]);
/// ```
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for last in (1..v.len()).rev() {
        for i in 0..last {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
            }
        }
    }
}

/// Sort a vector with a top-down merge sort, returning the sorted vector.
///
/// The vector is split at `len / 2`, both halves are sorted recursively, and
/// the merge takes from the left half only when the left element compares
/// `Less` than the right one (ties take the right element first).
///
/// # Examples
///
/// ```
/// use linear_lists::sort::merge_sort_by;
///
/// let v = merge_sort_by(vec![5, 2, 4, 3, 1], |a, b| b.cmp(a));
/// assert_eq!(v, vec![5, 4, 3, 2, 1]);
/// ```
pub fn merge_sort_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_vec(v, &mut compare)
}

fn merge_sort_vec<T, F>(mut left: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if left.len() < 2 {
        return left;
    }
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_vec(left, compare);
    let right = merge_sort_vec(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut left, mut right) = (left.into_iter().peekable(), right.into_iter().peekable());
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(l, r) == Ordering::Less {
            left.next()
        } else {
            right.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
