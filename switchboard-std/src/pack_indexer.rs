//! Per-type handler families indexed by position.
//!
//! Many discriminators name a type: message tag `k` means "the payload is the
//! `k`-th message type". [`PackIndexer`] lets such a family be written once per
//! type, as a [`TypeHandler`], and used wherever a per-index [`Execute`]
//! family is expected.

use crate::type_list::TypeAt;
use std::marker::PhantomData;
use switchboard_core::Execute;

/// A handler written against a type rather than an index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no handler for type `{T}` with arguments `{Args}`",
    label = "missing `TypeHandler<{T}, {Args}>` implementation"
)]
pub trait TypeHandler<T, Args> {
    /// The result of the operation.
    type Output;

    /// Runs the handler for type `T`.
    fn execute(args: Args) -> Self::Output;
}

/// Adapts a per-type family `E` over the type list `L` into a per-index
/// family: discriminator `I` runs `E`'s handler for the `I`-th type of `L`.
///
/// # Example
///
/// ```rust
/// use switchboard_core::Execute;
/// use switchboard_std::{PackIndexer, TypeHandler, type_list};
///
/// struct SizeOf;
///
/// impl<T> TypeHandler<T, ()> for SizeOf {
///     type Output = usize;
///
///     fn execute(_: ()) -> usize {
///         std::mem::size_of::<T>()
///     }
/// }
///
/// type Family = PackIndexer<SizeOf, type_list![i64, u8, i32]>;
///
/// assert_eq!(<Family as Execute<0, ()>>::execute(()), 8);
/// assert_eq!(<Family as Execute<1, ()>>::execute(()), 1);
/// assert_eq!(<Family as Execute<2, ()>>::execute(()), 4);
/// ```
pub struct PackIndexer<E, L>(PhantomData<fn() -> (E, L)>);

impl<const I: usize, Args, E, L> Execute<I, Args> for PackIndexer<E, L>
where
    L: TypeAt<I>,
    E: TypeHandler<<L as TypeAt<I>>::Output, Args>,
{
    type Output = <E as TypeHandler<<L as TypeAt<I>>::Output, Args>>::Output;

    #[inline]
    fn execute(args: Args) -> Self::Output {
        E::execute(args)
    }
}
