use super::{DoublyLinkedList, Node};
use std::cmp::Ordering;
use std::ptr::{self, NonNull};

/// Bubble sort over the nodes of `list`, swapping the elements of adjacent
/// nodes that compare `Greater`.
///
/// Pass *k* starts from the head and stops `k` nodes short of the tail, since
/// the last `k` elements are already final. Links are never touched.
pub(super) fn bubble_sort<T, F>(list: &mut DoublyLinkedList<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for steps in (1..list.len).rev() {
        let mut current = list.head;
        for _ in 0..steps {
            // SAFETY: `steps < len`, so `node` and its successor are nodes of
            // the list, and no other reference into it is alive.
            unsafe {
                let Some(node) = current else { break };
                let Some(next) = node.as_ref().next else { break };
                if compare(&node.as_ref().element, &next.as_ref().element) == Ordering::Greater {
                    swap_elements(node, next);
                }
                current = Some(next);
            }
        }
    }
}

/// Swap the elements of two distinct nodes.
unsafe fn swap_elements<T>(a: NonNull<Node<T>>, b: NonNull<Node<T>>) {
    debug_assert_ne!(a, b);
    ptr::swap(
        ptr::addr_of_mut!((*a.as_ptr()).element),
        ptr::addr_of_mut!((*b.as_ptr()).element),
    );
}
