//! Low-level primitives for uninitialised element storage.
//!
//! Every `unsafe` block in this crate lives here, each with a
//! `// SAFETY:` comment. The functions mirror the unstable
//! `MaybeUninit` slice helpers in `core`.

#![allow(unsafe_code)]

use std::mem::MaybeUninit;

/// Reinterpret initialised storage as `&[T]`.
///
/// # Safety
///
/// Every element of `slice` must be initialised.
pub(crate) unsafe fn slice_assume_init<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    // SAFETY: `MaybeUninit<T>` has the same layout as `T`, and the caller
    // guarantees every element is initialised.
    unsafe { &*(slice as *const [MaybeUninit<T>] as *const [T]) }
}

/// Reinterpret initialised storage as `&mut [T]`.
///
/// # Safety
///
/// Every element of `slice` must be initialised.
pub(crate) unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: as for `slice_assume_init`; the exclusive borrow is carried over.
    unsafe { &mut *(slice as *mut [MaybeUninit<T>] as *mut [T]) }
}

/// Write `value` into every element and return the now-initialised slice.
pub(crate) fn fill<T: Copy>(slice: &mut [MaybeUninit<T>], value: T) -> &mut [T] {
    for slot in slice.iter_mut() {
        slot.write(value);
    }
    // SAFETY: the loop above initialised every element.
    unsafe { slice_assume_init_mut(slice) }
}

/// Copy `src` into `dst` and return the now-initialised slice.
///
/// # Panics
///
/// Panics if the lengths differ.
pub(crate) fn copy_from<'a, T: Copy>(dst: &'a mut [MaybeUninit<T>], src: &[T]) -> &'a mut [T] {
    assert_eq!(dst.len(), src.len(), "copy_from length mismatch");
    for (slot, &value) in dst.iter_mut().zip(src) {
        slot.write(value);
    }
    // SAFETY: lengths are equal, so the loop initialised every element.
    unsafe { slice_assume_init_mut(dst) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_initialises_every_element() {
        let mut storage = [MaybeUninit::<i32>::uninit(); 4];
        let init = fill(&mut storage, 7);
        assert_eq!(init, &[7, 7, 7, 7]);
    }

    #[test]
    fn copy_from_preserves_order() {
        let mut storage = [MaybeUninit::<u8>::uninit(); 3];
        let init = copy_from(&mut storage, &[1, 2, 3]);
        assert_eq!(init, &[1, 2, 3]);
        // SAFETY: initialised by `copy_from` above.
        let shared = unsafe { slice_assume_init(&storage) };
        assert_eq!(shared, &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "copy_from length mismatch")]
    fn copy_from_rejects_length_mismatch() {
        let mut storage = [MaybeUninit::<u8>::uninit(); 2];
        copy_from(&mut storage, &[1, 2, 3]);
    }

    #[test]
    fn empty_slices_are_trivially_initialised() {
        let mut storage: [MaybeUninit<f64>; 0] = [];
        assert!(fill(&mut storage, 1.0).is_empty());
    }
}
