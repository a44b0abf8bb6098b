use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// Capacity used by the array-backed containers when no hint is given.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// A fixed-size allocation of possibly-uninitialized slots, grown by doubling.
///
/// The buffer does not track which slots are initialized; its owner keeps a
/// length `len` such that the slots `0..len` are initialized and the slots
/// `len..capacity` are not. Every `unsafe` method relies on that bookkeeping,
/// and the owner must drop the initialized prefix itself (see
/// [`Buffer::drop_prefix`]).
pub(crate) struct Buffer<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> Buffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: uninit_slots(capacity),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Double the capacity (an empty buffer grows to one slot), moving every
    /// slot into the new allocation at the same index.
    pub(crate) fn grow(&mut self) {
        let capacity = (self.capacity() * 2).max(1);
        let old = std::mem::replace(&mut self.slots, uninit_slots(capacity));
        for (slot, value) in self.slots.iter_mut().zip(old.into_vec()) {
            *slot = value;
        }
    }

    /// Swap two slots, whether they are initialized or not.
    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Write `value` into the slot `index`.
    ///
    /// It is unsafe because the slot must be uninitialized, otherwise the old
    /// value is leaked and the owner's bookkeeping goes wrong.
    #[inline]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// Move the value out of the slot `index`, leaving it uninitialized.
    ///
    /// It is unsafe because the slot must be initialized, and it must be
    /// treated as uninitialized afterwards.
    #[inline]
    pub(crate) unsafe fn take(&mut self, index: usize) -> T {
        self.slots[index].assume_init_read()
    }

    /// It is unsafe because the slot `index` must be initialized.
    #[inline]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        self.slots[index].assume_init_ref()
    }

    /// View the first `len` slots as a slice.
    ///
    /// It is unsafe because the slots `0..len` must be initialized.
    #[inline]
    pub(crate) unsafe fn prefix(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity());
        slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), len)
    }

    /// Mutable version of [`Buffer::prefix`].
    #[inline]
    pub(crate) unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity());
        slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), len)
    }

    /// Drop the values of the first `len` slots in place.
    ///
    /// It is unsafe because the slots `0..len` must be initialized, and they
    /// are uninitialized afterwards.
    pub(crate) unsafe fn drop_prefix(&mut self, len: usize) {
        ptr::drop_in_place(self.prefix_mut(len));
    }
}

fn uninit_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Buffer;

    #[test]
    fn buffer_grow_keeps_prefix() {
        let mut buffer = Buffer::with_capacity(2);
        assert_eq!(buffer.capacity(), 2);
        unsafe {
            buffer.write(0, String::from("a"));
            buffer.write(1, String::from("b"));
        }
        buffer.grow();
        assert_eq!(buffer.capacity(), 4);
        unsafe {
            buffer.write(2, String::from("c"));
            assert_eq!(buffer.prefix(3), ["a", "b", "c"]);
            assert_eq!(buffer.take(2), "c");
            assert_eq!(buffer.get(1), "b");
            buffer.drop_prefix(2);
        }
    }

    #[test]
    fn buffer_grow_from_empty() {
        let mut buffer = Buffer::<u8>::with_capacity(0);
        buffer.grow();
        assert_eq!(buffer.capacity(), 1);
        buffer.grow();
        assert_eq!(buffer.capacity(), 2);
    }
}
