//! Type lists for per-type handler families.
//!
//! A fixed, ordered list of types is an HList of `HCons` cells ending in
//! [`HNil`]. Positions are looked up at compile time through [`TypeAt`];
//! asking for a position past the end of the list fails to compile.

use std::marker::PhantomData;

/// HList terminator - the empty type list.
#[derive(Clone, Copy, Debug, Default)]
pub struct HNil;

/// HList cons cell - a type followed by more types.
///
/// The list is never instantiated with values; the cell only carries types.
pub struct HCons<H, T>(PhantomData<fn() -> (H, T)>);

/// Trait for computing the length of a type list at compile time.
pub trait Len {
    /// The number of types in this list.
    const LEN: usize;
}

impl Len for HNil {
    const LEN: usize = 0;
}

impl<H, T: Len> Len for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Looks up the type at position `I` of a type list.
///
/// A position past the end fails with "type list ends before the requested
/// position". The unsatisfied bound is reported on the tail where the walk
/// ran out, here `HNil` at position 0:
///
/// ```rust,compile_fail
/// use switchboard_std::{type_list, type_list::TypeAtIndex};
///
/// let _ = std::mem::size_of::<TypeAtIndex<type_list![i64, u8, i32], 3>>();
/// ```
#[diagnostic::on_unimplemented(
    message = "type list ends before the requested position",
    label = "position lookup ran past the end of this type list",
    note = "Positions are zero-based and must be less than the list length.",
    note = "The lookup walks the list one cell at a time; `{Self}` is the remainder of the list where it ran out, and {I} is the position left to skip there."
)]
pub trait TypeAt<const I: usize> {
    /// The type at position `I`.
    type Output;
}

/// Shorthand for `<L as TypeAt<I>>::Output`.
pub type TypeAtIndex<L, const I: usize> = <L as TypeAt<I>>::Output;

impl<H, T> TypeAt<0> for HCons<H, T> {
    type Output = H;
}

// Position `I` of a cons cell is position `I - 1` of its tail. Stable const
// generics cannot compute `I - 1`, so each step is spelled out.
macro_rules! impl_type_at {
    ($($index:literal => $prev:literal),* $(,)?) => {
        $(
            impl<H, T: TypeAt<$prev>> TypeAt<$index> for HCons<H, T> {
                type Output = <T as TypeAt<$prev>>::Output;
            }
        )*
    };
}

impl_type_at! {
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30, 32 => 31,
    33 => 32, 34 => 33, 35 => 34, 36 => 35, 37 => 36, 38 => 37, 39 => 38, 40 => 39,
    41 => 40, 42 => 41, 43 => 42, 44 => 43, 45 => 44, 46 => 45, 47 => 46, 48 => 47,
    49 => 48, 50 => 49, 51 => 50, 52 => 51, 53 => 52, 54 => 53, 55 => 54, 56 => 55,
    57 => 56, 58 => 57, 59 => 58, 60 => 59, 61 => 60, 62 => 61, 63 => 62,
}

/// Spell a type list in declaration order.
///
/// # Example
/// ```rust
/// use switchboard_std::{type_list, type_list::{Len, TypeAtIndex}};
///
/// type Primitives = type_list![i64, u8, i32];
///
/// assert_eq!(<Primitives as Len>::LEN, 3);
/// assert_eq!(std::mem::size_of::<TypeAtIndex<Primitives, 0>>(), 8);
/// ```
#[macro_export]
macro_rules! type_list {
    () => { $crate::type_list::HNil };
    ($head:ty $(,)?) => {
        $crate::type_list::HCons<$head, $crate::type_list::HNil>
    };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::type_list::HCons<$head, $crate::type_list!($($rest),+)>
    };
}
