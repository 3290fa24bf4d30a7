//! # switchboard-std
//!
//! Standard adaptors for the switchboard static dispatch library.
//!
//! This crate provides:
//! - **Type lists**: [`HCons`], [`HNil`], [`TypeAt`], [`type_list!`] macro
//! - **Per-type families**: [`PackIndexer`], [`TypeHandler`]
//! - **Optional operations**: [`detect`], [`call_or_default!`], [`has_operation!`]
//! - **In-place tags**: [`in_place`], [`is_in_place_type!`]
//! - **Observation**: [`Traced`]
//! - **Testing**: [`testing`]
//!
//! [`HCons`]: type_list::HCons
//! [`HNil`]: type_list::HNil
//! [`TypeAt`]: type_list::TypeAt
//! [`Traced`]: observe::Traced

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchboard_core;

// Modules
pub mod detect;
pub mod in_place;
pub mod observe;
pub mod pack_indexer;
pub mod testing;
pub mod type_list;

pub use pack_indexer::{PackIndexer, TypeHandler};
