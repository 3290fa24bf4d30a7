//! # switchboard - Static Dispatch Tables
//!
//! `switchboard` turns a runtime discriminator in `[0, N)` into a call to one
//! of `N` statically known handlers, at the cost of a hand-written jump table.
//! Adding an index to the domain means adding a handler; the dispatch code is
//! generated.
//!
//! ## Quick Start
//!
//! ```rust
//! use switchboard::{Execute, instantiate, switch_instantiate};
//!
//! #[derive(Default)]
//! struct Counters {
//!     a: u32,
//!     b: u32,
//! }
//!
//! // One handler per discriminator; the match is resolved per index.
//! struct Bump;
//!
//! impl<const I: usize> Execute<I, (&mut Counters,)> for Bump {
//!     type Output = ();
//!
//!     fn execute((counters,): (&mut Counters,)) {
//!         match I {
//!             3 => counters.a += 1,
//!             5 => counters.b += 1,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! instantiate! {
//!     fn bump(counters: &mut Counters) = Bump[7];
//! }
//!
//! switch_instantiate! {
//!     fn bump_switch(counters: &mut Counters) = Bump[7];
//! }
//!
//! let mut counters = Counters::default();
//! for index in [0, 1, 2, 3, 3, 4, 5, 6] {
//!     bump(&mut counters, index);
//! }
//! bump_switch(&mut counters, 5);
//! assert_eq!((counters.a, counters.b), (2, 2));
//! ```
//!
//! ## Two builders
//!
//! - [`instantiate!`] / [`jump_table!`]: an array of function pointers built in
//!   a `static`. O(1) dispatch through one indirect call. Out-of-range
//!   indices panic (`try` functions return [`DispatchError`]).
//! - [`switch_instantiate!`]: a `match` with one arm per index whose last arm
//!   is a wildcard. Every index `>= N - 1` runs the last handler (`try`
//!   functions return [`DispatchError`] instead). The branches are visible
//!   at the call site, so constant arguments can be propagated into each
//!   handler after inlining; whether the arms become a jump table is up to
//!   the optimizer.
//!
//! ## Completeness is checked at build time
//!
//! A family without a handler for some index of the domain does not compile:
//!
//! ```rust,compile_fail
//! use switchboard::{Execute, instantiate};
//!
//! struct OnlyZero;
//!
//! impl Execute<0, ()> for OnlyZero {
//!     type Output = ();
//!     fn execute(_: ()) {}
//! }
//!
//! instantiate! {
//!     fn run() = OnlyZero[2];
//! }
//! ```
//!
//! Neither does a type-list lookup past the end of the list:
//!
//! ```rust,compile_fail
//! use switchboard::{type_list, type_list::TypeAtIndex};
//!
//! type Out = TypeAtIndex<type_list![i64, u8, i32], 3>;
//! let _ = std::mem::size_of::<Out>();
//! ```
//!
//! Nor a family whose handlers disagree on the return type:
//!
//! ```rust,compile_fail
//! use switchboard::{Execute, switch_instantiate};
//!
//! struct Mixed;
//!
//! impl Execute<0, ()> for Mixed {
//!     type Output = u8;
//!     fn execute(_: ()) -> u8 { 0 }
//! }
//!
//! impl Execute<1, ()> for Mixed {
//!     type Output = u16;
//!     fn execute(_: ()) -> u16 { 1 }
//! }
//!
//! switch_instantiate! {
//!     fn run() -> u8 = Mixed[2];
//! }
//! ```
//!
//! ## Malformed macro input
//!
//! The macros reject input they cannot expand, pointing at the offending
//! tokens. An empty domain fails with "the dispatch domain must contain at
//! least one index":
//!
//! ```rust,compile_fail
//! use switchboard::{instantiate, testing::Echo};
//!
//! instantiate! {
//!     fn run() -> usize = Echo[0];
//! }
//! ```
//!
//! An argument named `index` fails with "`index` is reserved for the
//! discriminator, which is appended as the last argument":
//!
//! ```rust,compile_fail
//! use switchboard::{Execute, switch_instantiate};
//!
//! struct Offset;
//!
//! impl<const I: usize> Execute<I, (u8,)> for Offset {
//!     type Output = u8;
//!     fn execute((x,): (u8,)) -> u8 { x + I as u8 }
//! }
//!
//! switch_instantiate! {
//!     fn run(index: u8) -> u8 = Offset[2];
//! }
//! ```
//!
//! A destructuring argument fails with "dispatch function arguments must be
//! plain identifiers":
//!
//! ```rust,compile_fail
//! use switchboard::{Execute, instantiate};
//!
//! struct Sum;
//!
//! impl<const I: usize> Execute<I, ((u8, u8),)> for Sum {
//!     type Output = u8;
//!     fn execute(((a, b),): ((u8, u8),)) -> u8 { a + b }
//! }
//!
//! instantiate! {
//!     fn run((a, b): (u8, u8)) -> u8 = Sum[2];
//! }
//! ```
//!
//! A generic dispatch function fails with "generated dispatch functions
//! cannot be generic; the family must be a concrete type":
//!
//! ```rust,compile_fail
//! use switchboard::{instantiate, testing::Echo};
//!
//! instantiate! {
//!     fn run<T>() -> usize = Echo[2];
//! }
//! ```
//!
//! An optional family over no types fails with "the type list must contain
//! at least one type":
//!
//! ```rust,compile_fail
//! use switchboard::{detect::Operation, optional_family};
//!
//! struct Touch;
//!
//! impl Operation<u8, ()> for Touch {
//!     type Output = ();
//!     fn call(_: ()) {}
//! }
//!
//! optional_family! {
//!     struct Empty(fn()) = Touch for [];
//! }
//! ```
//!
//! The same items with the offending part removed expand and run:
//!
//! ```rust
//! use switchboard::{detect::Operation, instantiate, optional_family, testing::Echo};
//!
//! struct Touch;
//!
//! impl Operation<u8, ()> for Touch {
//!     type Output = ();
//!     fn call(_: ()) {}
//! }
//!
//! optional_family! {
//!     struct Bytes(fn()) = Touch for [u8, u16];
//! }
//!
//! instantiate! {
//!     fn run() -> usize = Echo[1];
//!     fn touch() = Bytes[2];
//! }
//!
//! assert_eq!(run(0), 0);
//! assert_eq!(Bytes::SIZE, 2);
//! touch(1);
//! ```
//!
//! ## Per-type families
//!
//! Families are often written per type and indexed by position in a type
//! list: see [`PackIndexer`] and [`optional_family!`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchboard_core::{
    // Error types
    BoxError,
    DispatchError,
    // Tables
    Dispatch,
    DispatchTable,
    // Families
    Execute,
    IndexSequence,
    index_array,
};

// Per-type families. `type_list` is both the module and its macro.
pub use switchboard_std::{
    PackIndexer, TypeHandler, call_or_default, has_operation, is_in_place_type, type_list,
};

/// Optional operations with a no-op fallback.
pub mod detect {
    pub use switchboard_std::detect::{Operation, Probe, ViaFallback, ViaOperation};
}

/// In-place construction tags.
pub mod in_place {
    #![allow(clippy::wildcard_imports)]
    pub use switchboard_std::in_place::*;
}

/// Dispatch observation.
pub mod observe {
    pub use switchboard_std::observe::Traced;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use switchboard_std::testing::*;
}

/// Prelude module - common imports for switchboard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Dispatch, DispatchError, DispatchTable, Execute, PackIndexer, TypeHandler,
        detect::Operation,
    };

    #[cfg(feature = "macros")]
    pub use crate::{instantiate, jump_table, optional_family, switch_instantiate};
}

#[cfg(feature = "macros")]
pub use switchboard_macros::{instantiate, jump_table, optional_family, switch_instantiate};
