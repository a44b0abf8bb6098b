//! Last-in, first-out stacks.
//!
//! [`ArrayStack`] and [`LinkedStack`] implement the same [`Stack`] contract
//! over different storage, so either can stand in for the other.

use crate::error::Result;

mod array;
mod linked;

pub use array::ArrayStack;
pub use linked::LinkedStack;

/// The operations shared by every stack in this crate.
///
/// # Examples
///
/// ```
/// use linear_lists::{ArrayStack, Error, LinkedStack, Stack};
///
/// fn drive<S: Stack<i32>>(mut stack: S) {
///     stack.push(1).unwrap();
///     stack.push(2).unwrap();
///     assert_eq!(stack.pop(), Ok(2));
///     assert_eq!(stack.peek(), Ok(&1));
///     assert_eq!(stack.push(None::<i32>), Err(Error::InvalidArgument));
///     assert_eq!(stack.pop(), Ok(1));
///     assert!(stack.is_empty());
///     assert_eq!(stack.pop(), Err(Error::EmptyContainer));
/// }
///
/// drive(ArrayStack::new());
/// drive(LinkedStack::new());
/// ```
pub trait Stack<T> {
    /// Push `item` on top of the stack.
    ///
    /// Fails with `InvalidArgument` if `item` is `None`.
    fn push<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>;

    /// Remove and return the most recently pushed element.
    ///
    /// Fails with `EmptyContainer` if the stack is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the most recently pushed element without removing it.
    ///
    /// Fails with `EmptyContainer` if the stack is empty.
    fn peek(&self) -> Result<&T>;

    fn is_empty(&self) -> bool;
}
