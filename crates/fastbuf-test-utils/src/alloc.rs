//! Per-thread allocation counting.
//!
//! Install [`CountingAllocator`] as the `#[global_allocator]` of a test
//! binary, then bracket the code under test with [`AllocSnapshot::current`]:
//!
//! ```ignore
//! use fastbuf_test_utils::{AllocSnapshot, CountingAllocator};
//!
//! #[global_allocator]
//! static ALLOC: CountingAllocator = CountingAllocator::system();
//!
//! let before = AllocSnapshot::current();
//! // ... code under test ...
//! let delta = AllocSnapshot::current().since(&before);
//! assert_eq!(delta.live_allocations(), 0);
//! ```
//!
//! Counters are thread-local, so tests running in parallel on other
//! threads do not disturb each other. Memory freed on a different thread
//! from the one that allocated it is counted on the freeing thread.

#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static COUNTERS: Cell<AllocSnapshot> = const { Cell::new(AllocSnapshot::ZERO) };
}

fn record(update: impl FnOnce(&mut AllocSnapshot)) {
    // `try_with` fails only during thread teardown; those events are dropped.
    let _ = COUNTERS.try_with(|cell| {
        let mut snapshot = cell.get();
        update(&mut snapshot);
        cell.set(snapshot);
    });
}

/// A [`GlobalAlloc`] wrapper around [`System`] that counts successful
/// allocations and deallocations on the calling thread.
pub struct CountingAllocator {
    inner: System,
}

impl CountingAllocator {
    /// Wrap the system allocator.
    pub const fn system() -> Self {
        Self { inner: System }
    }
}

// SAFETY: every call is forwarded unchanged to `System`; the bookkeeping
// touches only a const-initialised thread-local `Cell`, which never
// allocates.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout.
        let ptr = unsafe { self.inner.alloc(layout) };
        if !ptr.is_null() {
            record(|s| {
                s.allocations += 1;
                s.bytes_allocated += layout.size() as u64;
            });
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout.
        let ptr = unsafe { self.inner.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(|s| {
                s.allocations += 1;
                s.bytes_allocated += layout.size() as u64;
            });
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: the caller guarantees `ptr` came from this allocator
        // with `layout`.
        unsafe { self.inner.dealloc(ptr, layout) };
        record(|s| {
            s.deallocations += 1;
            s.bytes_freed += layout.size() as u64;
        });
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: forwarded unchanged.
        let new_ptr = unsafe { self.inner.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(|s| {
                s.reallocations += 1;
                s.bytes_freed += layout.size() as u64;
                s.bytes_allocated += new_size as u64;
            });
        }
        new_ptr
    }
}

/// Allocation counters for the current thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocSnapshot {
    pub allocations: u64,
    pub deallocations: u64,
    pub reallocations: u64,
    pub bytes_allocated: u64,
    pub bytes_freed: u64,
}

impl AllocSnapshot {
    const ZERO: Self = Self {
        allocations: 0,
        deallocations: 0,
        reallocations: 0,
        bytes_allocated: 0,
        bytes_freed: 0,
    };

    /// Counters accumulated on this thread so far.
    pub fn current() -> Self {
        COUNTERS.with(Cell::get)
    }

    /// Events recorded between `earlier` and `self`.
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            allocations: self.allocations - earlier.allocations,
            deallocations: self.deallocations - earlier.deallocations,
            reallocations: self.reallocations - earlier.reallocations,
            bytes_allocated: self.bytes_allocated - earlier.bytes_allocated,
            bytes_freed: self.bytes_freed - earlier.bytes_freed,
        }
    }

    /// Allocations not yet matched by a deallocation.
    pub fn live_allocations(&self) -> i64 {
        self.allocations as i64 - self.deallocations as i64
    }

    /// Bytes not yet freed.
    pub fn live_bytes(&self) -> i64 {
        self.bytes_allocated as i64 - self.bytes_freed as i64
    }

    /// Whether a [`CountingAllocator`] is installed as the global
    /// allocator. Probes with a one-byte allocation.
    pub fn tracking_enabled() -> bool {
        let before = Self::current();
        drop(std::hint::black_box(Box::new(0u8)));
        Self::current().since(&before).allocations == 1
    }
}
