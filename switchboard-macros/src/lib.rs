//! Procedural macros for switchboard.
//!
//! Stable const generics cannot count from `0` to `N`, so the per-index
//! expansion of a handler family happens here: each macro receives the domain
//! size as a literal and spells out one instantiation per index.
//!
//! Generated code refers to the `switchboard` facade crate by absolute path.

use proc_macro::TokenStream;

mod family;
mod instantiate;
mod signature;

/// Build a `DispatchTable` from a handler family.
///
/// ```rust,ignore
/// static TABLE: DispatchTable<fn((&mut Book,)) -> u32, 13> =
///     switchboard::jump_table!(MessageFamily[13]: fn(&mut Book) -> u32);
/// ```
///
/// Entry `k` calls `<MessageFamily as Execute<k, (&mut Book,)>>::execute`.
/// The table stores argument tuples; `DispatchTable::dispatch((book,), k)`
/// forwards to entry `k`.
#[proc_macro]
pub fn jump_table(input: TokenStream) -> TokenStream {
    instantiate::jump_table_impl(input)
}

/// Generate array-based dispatch functions.
///
/// ```rust,ignore
/// switchboard::instantiate! {
///     /// Route a message to its processor.
///     pub fn route(book: &mut Book) -> u32 = MessageFamily[13];
///
///     /// Same, rejecting unknown message types.
///     pub try fn try_route(book: &mut Book) -> u32 = MessageFamily[13];
/// }
/// ```
///
/// Each item becomes a function taking the declared arguments followed by
/// `index: usize`, backed by a `static` table. Out-of-range indices panic,
/// or return `DispatchError::OutOfRange` for `try` items.
#[proc_macro]
pub fn instantiate(input: TokenStream) -> TokenStream {
    instantiate::instantiate_impl(input)
}

/// Generate branch-based dispatch functions.
///
/// Same input as [`instantiate!`]. The body is a `match` over the index whose
/// last arm is a wildcard, so every index `>= N - 1` runs the last handler.
/// `try` items check the index first and reject `index >= N`.
#[proc_macro]
pub fn switch_instantiate(input: TokenStream) -> TokenStream {
    instantiate::switch_instantiate_impl(input)
}

/// Build a handler family over a type list from an optional operation.
///
/// ```rust,ignore
/// switchboard::optional_family! {
///     pub struct Processors(fn(&mut Book)) = ProcessMessage for [Quote, Trade, Uptick];
/// }
/// ```
///
/// Position `k` runs `ProcessMessage` for the `k`-th type when
/// `ProcessMessage: Operation<Type, (&mut Book,)>`, and returns
/// `Default::default()` otherwise.
#[proc_macro]
pub fn optional_family(input: TokenStream) -> TokenStream {
    family::optional_family_impl(input)
}
