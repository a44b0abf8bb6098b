use std::fmt::{Debug, Formatter};

use super::Stack;
use crate::error::{present, Error, Result};

/// A stack made of nodes, each owning the node pushed before it.
///
/// Only the top node is kept; popping it exposes its predecessor.
///
/// ```text
///   ╔══════════╗      ┌───────────┐      ┌───────────┐
///   ║   top    ║ ───→ │   prev    │ ───→ │   prev    │ ───→ None
///   ╟──────────╢      ├───────────┤      ├───────────┤
///   ║   len    ║      │ element T │      │ element T │
///   ╚══════════╝      └───────────┘      └───────────┘
///      Stack           last pushed        first pushed
/// ```
pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    element: T,
    prev: Option<Box<Node<T>>>,
}

impl<T> LinkedStack<T> {
    /// Create an empty `LinkedStack`.
    #[inline]
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let element = present(item)?;
        let prev = self.top.take();
        self.top = Some(Box::new(Node { element, prev }));
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(Error::EmptyContainer)?;
        let Node { element, prev } = *node;
        self.top = prev;
        self.len -= 1;
        Ok(element)
    }

    fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.element)
            .ok_or(Error::EmptyContainer)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    /// Formats the elements from the top down.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let nodes = std::iter::successors(self.top.as_deref(), |node| node.prev.as_deref());
        f.debug_list()
            .entries(nodes.map(|node| &node.element))
            .finish()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.prev.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedStack;
    use crate::Stack;

    #[test]
    fn linked_stack_contract() {
        crate::stack::tests::check_all::<LinkedStack<i32>>();
    }

    #[test]
    fn linked_stack_top_down() {
        let mut stack = LinkedStack::new();
        for word in ["bottom", "middle", "top"] {
            stack.push(word).unwrap();
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(format!("{:?}", stack), r#"["top", "middle", "bottom"]"#);
        assert_eq!(stack.pop(), Ok("top"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn linked_stack_long_chain_drop() {
        let mut stack = LinkedStack::new();
        for i in 0..200_000u32 {
            stack.push(i).unwrap();
        }
        drop(stack);
    }
}
