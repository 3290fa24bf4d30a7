//! # switchboard-core
//!
//! Core traits for the switchboard static dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by code
//! that defines handler families without needing the adaptors and macros of
//! the full `switchboard` crate.
//!
//! # Model
//!
//! A runtime discriminator in the closed domain `[0, N)` selects one of `N`
//! statically known handlers:
//!
//! - [`Execute`] - The handler family: one operation per compile-time index
//! - [`DispatchTable`] - The array-based realization, one entry per index
//! - [`Dispatch`] - The interface shared by table-like dispatchers
//! - [`IndexSequence`] - The compile-time sequence `0..N`
//!
//! Handler completeness is a build-time property: a family missing the
//! handler for some index in the domain does not compile.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Checked dispatch rejected the discriminator

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod execute;
mod sequence;
mod table;

// Re-exports
pub use error::{BoxError, DispatchError};
pub use execute::Execute;
pub use sequence::{IndexSequence, index_array};
pub use table::{Dispatch, DispatchTable};
