//! # Handler families
//!
//! A handler family is a type that provides one `execute` operation per
//! discriminator value. The discriminator is a const generic, so every index
//! gets its own compiled body and the dispatch builders can wire them into a
//! table without any per-call branching on the index.
//!
//! # Usage Patterns
//!
//! 1. **Per index**: `impl Execute<3, (&mut Counters,)> for MyFamily { ... }`
//!    for each index of the domain. Leaving one out is a build failure.
//! 2. **Blanket**: `impl<const I: usize> Execute<I, Args> for MyFamily` with a
//!    body that matches on `I`. The match is resolved per monomorphization.
//! 3. **Per type**: adapt a per-type family through `PackIndexer` or the
//!    `optional_family!` macro.

/// The operation a handler family provides for discriminator `I`.
///
/// `Args` is the argument tuple shared by the whole family: `()` for no
/// arguments, `(A,)` for one, `(A, B)` for two and so on.
///
/// # Example
///
/// ```rust
/// use switchboard_core::Execute;
///
/// struct Echo;
///
/// impl<const I: usize> Execute<I, ()> for Echo {
///     type Output = usize;
///
///     fn execute(_: ()) -> usize {
///         I
///     }
/// }
///
/// assert_eq!(<Echo as Execute<4, ()>>::execute(()), 4);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no handler for discriminator {I} with arguments `{Args}`",
    label = "missing `Execute<{I}, {Args}>` implementation",
    note = "Every index of the domain needs a handler. Implement `Execute<{I}, {Args}>` or route the family through `optional_family!` to get a no-op fallback."
)]
pub trait Execute<const I: usize, Args> {
    /// The result of the operation. Must agree across the whole domain.
    type Output;

    /// Runs the handler for discriminator `I`.
    fn execute(args: Args) -> Self::Output;
}
