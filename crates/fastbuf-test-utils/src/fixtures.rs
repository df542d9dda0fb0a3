//! Reusable buffer fixtures.
//!
//! - [`churn`] runs construct → move → drop cycles.
//! - [`pass_through`] hands a buffer through a chain of moves.
//! - [`Handle`] records a buffer's pointer and length for later comparison.

use fastbuf::{BufferError, FastBuffer, Scalar};

/// Pointer and length of a buffer at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle<T> {
    pub data: *const T,
    pub len: usize,
}

impl<T: Scalar> Handle<T> {
    pub fn of(buf: &FastBuffer<T>) -> Self {
        Self {
            data: buf.data(),
            len: buf.len(),
        }
    }

    /// The empty handle: null pointer, zero length.
    pub fn empty() -> Self {
        Self {
            data: std::ptr::null(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_null() && self.len == 0
    }
}

/// Run `iterations` cycles of: allocate `len` elements, move the buffer
/// out with `take`, move it again with `move_from`, drop everything.
pub fn churn(iterations: usize, len: usize) -> Result<(), BufferError> {
    for _ in 0..iterations {
        let mut first = FastBuffer::<i32>::with_len(len)?;
        let mut second = first.take();
        let mut third = FastBuffer::<i32>::new();
        third.move_from(&mut second);
        debug_assert!(first.is_empty() && second.is_empty());
        debug_assert_eq!(third.len(), len);
    }
    Ok(())
}

/// Move `buf` through `hops` intermediate owners and return the last one.
pub fn pass_through<T: Scalar>(buf: FastBuffer<T>, hops: usize) -> FastBuffer<T> {
    let mut current = buf;
    for _ in 0..hops {
        let mut next = FastBuffer::new();
        next.move_from(&mut current);
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_of_empty_buffer_is_empty() {
        let buf = FastBuffer::<u8>::new();
        assert!(Handle::of(&buf).is_empty());
        assert_eq!(Handle::of(&buf), Handle::empty());
    }

    #[test]
    fn pass_through_keeps_allocation() {
        let buf = FastBuffer::<i32>::with_len(12).unwrap();
        let before = Handle::of(&buf);
        let after = pass_through(buf, 5);
        assert_eq!(Handle::of(&after), before);
    }

    #[test]
    fn churn_succeeds() {
        churn(10, 100).unwrap();
    }
}
