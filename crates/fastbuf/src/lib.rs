//! A move-only, fixed-size, heap-backed scalar buffer.
//!
//! [`FastBuffer`] owns at most one contiguous allocation. Ownership moves
//! between values but is never shared: the type implements neither
//! `Clone` nor `Copy`, and a moved-from buffer is left empty.
//!
//! # Representation
//!
//! ```text
//! FastBuffer<T>
//! └── Option<Box<[MaybeUninit<T>]>>
//!     ├── None          empty: data() is null, len() is 0
//!     └── Some(slice)   owning: slice.len() > 0, released on drop
//! ```
//!
//! A zero-length request never allocates, so `data().is_null()` holds
//! exactly when `len() == 0`.
//!
//! # Unsafe code
//!
//! Allocation goes through `Vec::try_reserve_exact` and needs no `unsafe`.
//! The only `unsafe` lives in the private `raw` module, which reinterprets
//! initialised element storage as `&[T]`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
mod raw;

// Public re-exports for the primary API surface.
pub use buffer::FastBuffer;
pub use config::{BufferConfig, InitPolicy};
pub use fastbuf_core::{is_power_of_two, BufferError, Scalar};
