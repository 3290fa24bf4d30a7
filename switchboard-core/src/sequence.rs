//! Compile-time integer sequences.

/// The sequence `0, 1, ..., N - 1`, available as constants.
///
/// # Example
///
/// ```rust
/// use switchboard_core::IndexSequence;
///
/// assert_eq!(IndexSequence::<3>::ARITY, 3);
/// assert_eq!(IndexSequence::<3>::INDICES, [0, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexSequence<const N: usize>;

impl<const N: usize> IndexSequence<N> {
    /// Number of indices in the sequence.
    pub const ARITY: usize = N;

    /// The indices themselves, in ascending order.
    pub const INDICES: [usize; N] = index_array::<N>();

    /// Iterate the sequence.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
        Self::INDICES.into_iter()
    }
}

/// Builds `[0, 1, ..., N - 1]` in a const context.
pub const fn index_array<const N: usize>() -> [usize; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = i;
        i += 1;
    }
    out
}
