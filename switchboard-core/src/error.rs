//! Error types for switchboard.
//!
//! Handler completeness is checked by the compiler, so the only runtime
//! failure the dispatch layer knows about is a discriminator outside the
//! domain:
//!
//! - [`DispatchError`] - Errors during checked dispatch

use thiserror::Error;

/// A boxed error type for handlers that report their own failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during checked dispatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The discriminator does not name an entry of the domain `[0, size)`.
    #[error("dispatch index {index} out of range for domain of size {size}")]
    OutOfRange {
        /// The rejected discriminator.
        index: usize,
        /// The size of the domain.
        size: usize,
    },
}

impl DispatchError {
    /// Checks `index` against a domain of `size` entries.
    #[inline]
    pub const fn check(index: usize, size: usize) -> Result<usize, DispatchError> {
        if index < size {
            Ok(index)
        } else {
            Err(DispatchError::OutOfRange { index, size })
        }
    }
}
