//! The move-only owning buffer.

use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr;

use fastbuf_core::{BufferError, Scalar};

use crate::config::{BufferConfig, InitPolicy};
use crate::raw;

/// A fixed-size heap buffer with exactly one owner.
///
/// A buffer is either empty (no allocation, null [`data`](Self::data),
/// zero [`len`](Self::len)) or owns one allocation of `len > 0`
/// elements. Ownership moves with the value; [`take`](Self::take) and
/// [`move_from`](Self::move_from) transfer it while leaving the source
/// empty and still droppable. The allocation is released exactly once,
/// when its current owner is dropped.
///
/// Element storage starts uninitialised unless built with
/// [`zeroed`](Self::zeroed), [`filled`](Self::filled),
/// [`from_slice`](Self::from_slice) or an [`InitPolicy::Zeroed`] config.
///
/// There is no copy path. Duplicating a buffer does not compile:
///
/// ```compile_fail
/// use fastbuf::FastBuffer;
///
/// let a = FastBuffer::<i32>::with_len(4).unwrap();
/// let b = a.clone();
/// ```
///
/// Moves are checked statically, so a moved-from binding cannot be used:
///
/// ```compile_fail
/// use fastbuf::FastBuffer;
///
/// let a = FastBuffer::<i32>::with_len(4).unwrap();
/// let b = a;
/// let _ = a.len();
/// ```
pub struct FastBuffer<T: Scalar = i32> {
    /// `None` when empty. Never `Some` of a zero-length slice.
    storage: Option<Box<[MaybeUninit<T>]>>,
}

impl<T: Scalar> FastBuffer<T> {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { storage: None }
    }

    /// Allocate storage for `count` uninitialised elements.
    ///
    /// `count == 0` returns an empty buffer without allocating.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfMemory`] if the allocator refuses the request
    /// or its byte size exceeds `isize::MAX`.
    pub fn with_len(count: usize) -> Result<Self, BufferError> {
        Self::with_config(count, &BufferConfig::new())
    }

    /// Allocate storage for `count` elements, each set to [`Scalar::ZERO`].
    pub fn zeroed(count: usize) -> Result<Self, BufferError> {
        Self::with_config(count, &BufferConfig::new().with_init(InitPolicy::Zeroed))
    }

    /// Allocate storage for `count` elements, each set to `value`.
    pub fn filled(count: usize, value: T) -> Result<Self, BufferError> {
        let mut buf = Self::with_len(count)?;
        buf.fill(value);
        Ok(buf)
    }

    /// Allocate a buffer holding a copy of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, BufferError> {
        let mut buf = Self::with_len(src.len())?;
        raw::copy_from(buf.as_uninit_slice_mut(), src);
        Ok(buf)
    }

    /// Allocate storage for `count` elements under `config`.
    ///
    /// Requests larger than [`BufferConfig::max_bytes`] are refused
    /// before reaching the allocator.
    pub fn with_config(count: usize, config: &BufferConfig) -> Result<Self, BufferError> {
        if count == 0 {
            return Ok(Self::new());
        }

        let element_size = mem::size_of::<T>();
        let out_of_memory = BufferError::OutOfMemory {
            requested: count,
            element_size,
        };
        if !config.admits(count, element_size) {
            tracing::debug!(
                len = count,
                element_size,
                requested_bytes = ?out_of_memory.requested_bytes(),
                max_bytes = config.max_bytes,
                "buffer request exceeds allocation budget"
            );
            return Err(out_of_memory);
        }

        let mut storage: Vec<MaybeUninit<T>> = Vec::new();
        if let Err(err) = storage.try_reserve_exact(count) {
            tracing::debug!(
                len = count,
                element_size,
                requested_bytes = ?out_of_memory.requested_bytes(),
                error = %err,
                "buffer allocation failed"
            );
            return Err(out_of_memory);
        }
        // Capacity is reserved, so neither resize reallocates.
        match config.init {
            InitPolicy::Uninit => storage.resize_with(count, MaybeUninit::uninit),
            InitPolicy::Zeroed => storage.resize(count, MaybeUninit::new(T::ZERO)),
        }

        tracing::trace!(len = count, bytes = count * element_size, "buffer allocated");
        Ok(Self {
            storage: Some(storage.into_boxed_slice()),
        })
    }

    /// Move the allocation out into a new buffer, leaving `self` empty.
    ///
    /// O(1): only the owning handle moves, never the elements.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Release this buffer's allocation and take ownership of `source`'s.
    ///
    /// `source` is left empty. The donor's state is captured before the
    /// receiver's old allocation is released, and the borrow checker
    /// rejects `buf.move_from(&mut buf)`, so a buffer can never release
    /// storage it is about to receive.
    pub fn move_from(&mut self, source: &mut Self) {
        let incoming = source.take();
        *self = incoming;
    }

    /// Raw pointer to the first element, or null if empty.
    pub fn data(&self) -> *const T {
        match &self.storage {
            Some(storage) => storage.as_ptr().cast(),
            None => ptr::null(),
        }
    }

    /// Mutable raw pointer to the first element, or null if empty.
    pub fn data_mut(&mut self) -> *mut T {
        match &mut self.storage {
            Some(storage) => storage.as_mut_ptr().cast(),
            None => ptr::null_mut(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.storage.as_ref().map_or(0, |storage| storage.len())
    }

    /// Whether the buffer owns no allocation.
    pub fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    /// Size of the owned allocation in bytes.
    pub fn size_bytes(&self) -> usize {
        self.len() * mem::size_of::<T>()
    }

    /// The element storage, possibly uninitialised.
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        self.storage.as_deref().unwrap_or_default()
    }

    /// The element storage for writing, possibly uninitialised.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.storage.as_deref_mut().unwrap_or_default()
    }

    /// Set every element to `value` and return them as initialised.
    pub fn fill(&mut self, value: T) -> &mut [T] {
        raw::fill(self.as_uninit_slice_mut(), value)
    }

    /// View the elements as initialised.
    ///
    /// # Safety
    ///
    /// Every element must have been written, e.g. by [`fill`](Self::fill),
    /// through [`as_uninit_slice_mut`](Self::as_uninit_slice_mut), or by
    /// a zeroing constructor.
    #[allow(unsafe_code)]
    pub unsafe fn assume_init_ref(&self) -> &[T] {
        // SAFETY: forwarded to the caller.
        unsafe { raw::slice_assume_init(self.as_uninit_slice()) }
    }

    /// Mutable view of the elements as initialised.
    ///
    /// # Safety
    ///
    /// As for [`assume_init_ref`](Self::assume_init_ref).
    #[allow(unsafe_code)]
    pub unsafe fn assume_init_mut(&mut self) -> &mut [T] {
        // SAFETY: forwarded to the caller.
        unsafe { raw::slice_assume_init_mut(self.as_uninit_slice_mut()) }
    }
}

impl<T: Scalar> Default for FastBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Drop for FastBuffer<T> {
    fn drop(&mut self) {
        if let Some(storage) = self.storage.take() {
            tracing::trace!(
                len = storage.len(),
                bytes = storage.len() * mem::size_of::<T>(),
                "buffer released"
            );
        }
    }
}

impl<T: Scalar> fmt::Debug for FastBuffer<T> {
    // Elements may be uninitialised, so only the handle is printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastBuffer")
            .field("len", &self.len())
            .field("data", &self.data())
            .finish()
    }
}
