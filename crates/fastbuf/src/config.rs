//! Buffer construction parameters.

/// How freshly allocated elements are initialised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitPolicy {
    /// Leave element storage uninitialised.
    #[default]
    Uninit,
    /// Write [`Scalar::ZERO`](fastbuf_core::Scalar::ZERO) to every element.
    Zeroed,
}

/// Configuration for sized buffer construction.
///
/// Passed to [`FastBuffer::with_config`](crate::FastBuffer::with_config).
/// Plain [`FastBuffer::with_len`](crate::FastBuffer::with_len) uses
/// [`BufferConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Largest allocation a single buffer may request, in bytes.
    ///
    /// Requests above this budget fail with
    /// [`BufferError::OutOfMemory`](fastbuf_core::BufferError::OutOfMemory)
    /// without reaching the allocator. Default: `isize::MAX`, the
    /// largest size any Rust allocation may have.
    pub max_bytes: usize,

    /// Initialisation applied to each element after allocation.
    ///
    /// Default: [`InitPolicy::Uninit`].
    pub init: InitPolicy,
}

impl BufferConfig {
    /// Default allocation budget: the Rust allocation size limit.
    pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            init: InitPolicy::Uninit,
        }
    }

    /// Set the allocation budget.
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the initialisation policy.
    pub const fn with_init(mut self, init: InitPolicy) -> Self {
        self.init = init;
        self
    }

    /// Whether `count` elements of `element_size` bytes fit the budget.
    pub fn admits(&self, count: usize, element_size: usize) -> bool {
        count
            .checked_mul(element_size)
            .is_some_and(|bytes| bytes <= self.max_bytes)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_isize_max() {
        let config = BufferConfig::default();
        assert_eq!(config.max_bytes, isize::MAX as usize);
        assert_eq!(config.init, InitPolicy::Uninit);
    }

    #[test]
    fn builder_sets_fields() {
        let config = BufferConfig::new()
            .with_max_bytes(1024)
            .with_init(InitPolicy::Zeroed);
        assert_eq!(config.max_bytes, 1024);
        assert_eq!(config.init, InitPolicy::Zeroed);
    }

    #[test]
    fn admits_respects_budget() {
        let config = BufferConfig::new().with_max_bytes(400);
        assert!(config.admits(100, 4));
        assert!(!config.admits(101, 4));
    }

    #[test]
    fn admits_rejects_overflow() {
        let config = BufferConfig::new();
        assert!(!config.admits(usize::MAX, 8));
    }
}
