//! Core types for the fastbuf owning buffer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy, the [`Scalar`] element bound, and the
//! power-of-two predicate in [`pow2`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pow2;
pub mod scalar;

pub use error::BufferError;
pub use pow2::{is_power_of_two, is_power_of_two_i64, is_power_of_two_usize};
pub use scalar::Scalar;
