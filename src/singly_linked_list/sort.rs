use super::{Link, Node};
use std::cmp::Ordering;

/// Sort the chain starting at `head` and return its new head.
///
/// The chain is cut in two at the midpoint found by [`front_half_len`], both
/// halves are sorted recursively, and then relinked by [`merge`].
pub(super) fn merge_sort<T, F>(mut head: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let front_len = match head.as_deref() {
        Some(node) if node.next.is_some() => front_half_len(node),
        _ => return head,
    };
    let back = split_after(&mut head, front_len);
    let front = merge_sort(head, compare);
    let back = merge_sort(back, compare);
    merge(front, back, compare)
}

/// Number of nodes in the front half of the chain starting at `head`.
///
/// `fast` moves two nodes for every node `slow` moves; when `fast` cannot
/// move two nodes further, `slow` counts the front half.
fn front_half_len<T>(head: &Node<T>) -> usize {
    let mut slow = 1;
    let mut fast = head;
    while let Some(node) = fast.next.as_deref().and_then(|next| next.next.as_deref()) {
        fast = node;
        slow += 1;
    }
    slow
}

/// Cut the chain after its first `len` nodes, returning the rest.
fn split_after<T>(head: &mut Link<T>, len: usize) -> Link<T> {
    let mut link = head;
    for _ in 0..len {
        link = &mut link.as_mut()?.next;
    }
    link.take()
}

/// Merge two sorted chains by relinking their nodes.
///
/// The front node of `left` is taken only if it compares `Less` than the
/// front node of `right`.
fn merge<T, F>(mut left: Link<T>, mut right: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = None;
    let mut tail = &mut merged;
    loop {
        let from_left = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => compare(&l.element, &r.element) == Ordering::Less,
            _ => break,
        };
        let source = if from_left { &mut left } else { &mut right };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    // Whichever chain is left is already sorted and linked.
    *tail = left.or(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinglyLinkedList;
    use std::cell::Cell;

    fn chain(elements: &[i32]) -> Link<i32> {
        elements.iter().rev().fold(None, |next, &element| {
            Some(Box::new(Node { element, next }))
        })
    }

    fn collect(mut link: &Link<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(node) = link {
            out.push(node.element);
            link = &node.next;
        }
        out
    }

    #[test]
    fn front_half() {
        let lens: Vec<usize> = (1..=6)
            .map(|n| {
                let elements: Vec<i32> = (0..n).collect();
                front_half_len(chain(&elements).as_deref().unwrap())
            })
            .collect();
        assert_eq!(lens, [1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn split_and_merge() {
        let mut head = chain(&[1, 4, 2, 3]);
        let back = split_after(&mut head, 2);
        assert_eq!(collect(&head), [1, 4]);
        assert_eq!(collect(&back), [2, 3]);

        let merged = merge(chain(&[1, 4]), chain(&[2, 3]), &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(collect(&merged), [1, 2, 3, 4]);
        let merged = merge(None, chain(&[2, 3]), &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(collect(&merged), [2, 3]);
    }

    #[test]
    fn merge_prefers_right_on_ties() {
        let mut list = SinglyLinkedList::from_iter([(1, 'a'), (0, 'b'), (1, 'c')]);
        let calls = Cell::new(0);
        crate::Sequence::sort_by(&mut list, |x: &(i32, char), y: &(i32, char)| {
            calls.set(calls.get() + 1);
            x.0.cmp(&y.0)
        });
        // [(1,'a'), (0,'b')] | [(1,'c')]
        assert_eq!(*crate::Sequence::to_array(&list), [(0, 'b'), (1, 'c'), (1, 'a')]);
        assert_eq!(calls.get(), 3);
    }
}
