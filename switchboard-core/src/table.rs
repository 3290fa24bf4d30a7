//! # Dispatch tables
//!
//! [`DispatchTable`] is the array-based realization: one function pointer per
//! discriminator, built in a `const` context so the whole table is constant
//! data in the program image. Dispatch is one bounds check, one index and one
//! indirect call.
//!
//! Tables are normally produced by the `jump_table!` macro, which generates a
//! distinct shim per index of a handler family. They can also be written by
//! hand from any array of callables.
//!
//! [`Dispatch`] is the common interface of table-like dispatchers, so that
//! observers and tests can wrap any of them.

use crate::{error::DispatchError, sequence::IndexSequence};

/// Something that forwards `(args, index)` to the handler for `index`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch arguments `{Args}` to handlers returning `{R}`",
    label = "missing `Dispatch<{Args}, {R}>` implementation",
    note = "Table entries must be callable as `Fn({Args}) -> {R}`."
)]
pub trait Dispatch<Args, R> {
    /// The number of valid discriminators, `N` in `[0, N)`.
    fn size(&self) -> usize;

    /// Invoke the handler for `index`.
    ///
    /// What happens for `index >= size()` is up to the implementor and must
    /// be documented there.
    fn dispatch(&self, args: Args, index: usize) -> R;

    /// Invoke the handler for `index`, rejecting indices outside the domain.
    fn try_dispatch(&self, args: Args, index: usize) -> Result<R, DispatchError> {
        DispatchError::check(index, self.size())?;
        Ok(self.dispatch(args, index))
    }
}

/// A fixed-size table of entry points indexed by discriminator.
///
/// `P` is the entry type, usually a function pointer `fn(Args) -> R` where
/// `Args` is the argument tuple of the handler family.
///
/// # Example
///
/// ```rust
/// use switchboard_core::DispatchTable;
///
/// fn zero(_: ()) -> u8 { 0 }
/// fn one(_: ()) -> u8 { 1 }
///
/// static TABLE: DispatchTable<fn(()) -> u8, 2> = DispatchTable::new([zero, one]);
///
/// assert_eq!(TABLE.dispatch((), 1), 1);
/// assert!(TABLE.try_dispatch((), 2).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DispatchTable<P, const N: usize> {
    entries: [P; N],
}

impl<P, const N: usize> DispatchTable<P, N> {
    /// Create a table from its entries, entry `k` serving discriminator `k`.
    pub const fn new(entries: [P; N]) -> Self {
        Self { entries }
    }

    /// Get the size of the domain.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the domain is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// All entries, in discriminator order.
    #[inline]
    pub const fn entries(&self) -> &[P; N] {
        &self.entries
    }

    /// The valid discriminators of this table.
    #[inline]
    pub const fn indices(&self) -> [usize; N] {
        IndexSequence::<N>::INDICES
    }
}

impl<P: Copy, const N: usize> DispatchTable<P, N> {
    /// Look up the entry for `index`.
    #[inline]
    pub fn entry(&self, index: usize) -> Option<P> {
        self.entries.get(index).copied()
    }

    /// Invoke the entry for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`try_dispatch`](Self::try_dispatch) to
    /// get the out-of-range case as a value.
    #[inline]
    #[track_caller]
    pub fn dispatch<A, R>(&self, args: A, index: usize) -> R
    where
        P: Fn(A) -> R,
    {
        match self.entries.get(index) {
            Some(entry) => entry(args),
            None => panic!("{}", DispatchError::OutOfRange { index, size: N }),
        }
    }

    /// Invoke the entry for `index`, or report that it is out of range.
    #[inline]
    pub fn try_dispatch<A, R>(&self, args: A, index: usize) -> Result<R, DispatchError>
    where
        P: Fn(A) -> R,
    {
        match self.entries.get(index) {
            Some(entry) => Ok(entry(args)),
            None => Err(DispatchError::OutOfRange { index, size: N }),
        }
    }

    /// Invoke the entry for `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn dispatch_unchecked<A, R>(&self, args: A, index: usize) -> R
    where
        P: Fn(A) -> R,
    {
        debug_assert!(index < N, "dispatch index {index} out of range for {N}");
        // SAFETY: the caller guarantees `index < N`.
        let entry = unsafe { self.entries.get_unchecked(index) };
        entry(args)
    }
}

impl<P, A, R, const N: usize> Dispatch<A, R> for DispatchTable<P, N>
where
    P: Fn(A) -> R + Copy,
{
    #[inline]
    fn size(&self) -> usize {
        N
    }

    /// Panics for `index >= N`, like [`DispatchTable::dispatch`].
    #[inline]
    fn dispatch(&self, args: A, index: usize) -> R {
        DispatchTable::dispatch(self, args, index)
    }
}
