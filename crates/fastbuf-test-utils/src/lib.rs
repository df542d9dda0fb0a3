//! Test utilities for fastbuf development.
//!
//! Provides a counting global allocator ([`CountingAllocator`]) for
//! leak and double-free checks, and buffer fixtures in [`fixtures`].

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod fixtures;

pub use alloc::{AllocSnapshot, CountingAllocator};
