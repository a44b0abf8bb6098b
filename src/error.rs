use thiserror::Error;

/// Errors raised by the containers of this crate.
///
/// Every failing operation validates its arguments before touching the
/// container, so an `Err` always leaves the container unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An absent (`None`) element was given to an insertion-style operation.
    #[error("item is absent")]
    InvalidArgument,
    /// An index outside the valid range was given to `insert`, `remove` or `peek`.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// `dequeue`, `pop` or `peek` was called on an empty queue or stack.
    #[error("container is empty")]
    EmptyContainer,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn present<T, I: Into<Option<T>>>(item: I) -> Result<T> {
    item.into().ok_or(Error::InvalidArgument)
}
