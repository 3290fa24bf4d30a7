//! Dispatch observation.
//!
//! [`Traced`] wraps any [`Dispatch`] implementor and reports each dispatch
//! through `tracing` when the `tracing` feature is enabled. Without the
//! feature the wrapper forwards and adds nothing.

use switchboard_core::{Dispatch, DispatchError};

/// A dispatcher that logs the discriminators flowing through it.
#[derive(Clone, Copy, Debug)]
pub struct Traced<D> {
    name: &'static str,
    inner: D,
}

impl<D> Traced<D> {
    /// Wrap `inner`, labelling its log records with `name`.
    pub const fn new(name: &'static str, inner: D) -> Self {
        Self { name, inner }
    }

    /// The label used in log records.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped dispatcher.
    pub const fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D, A, R> Dispatch<A, R> for Traced<D>
where
    D: Dispatch<A, R>,
{
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn dispatch(&self, args: A, index: usize) -> R {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(table = self.name, index, size = self.inner.size(), "dispatch");
        }
        self.inner.dispatch(args, index)
    }

    fn try_dispatch(&self, args: A, index: usize) -> Result<R, DispatchError> {
        let result = self.inner.try_dispatch(args, index);
        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(_) => tracing::trace!(table = self.name, index, "dispatch"),
                Err(error) => tracing::warn!(table = self.name, %error, "dispatch rejected"),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::Traced;
    use switchboard_core::{Dispatch, DispatchError, DispatchTable};

    fn first(_: ()) -> char {
        'a'
    }

    fn second(_: ()) -> char {
        'b'
    }

    static TABLE: DispatchTable<fn(()) -> char, 2> = DispatchTable::new([first, second]);

    #[test]
    fn test_traced_forwards() {
        let traced = Traced::new("letters", TABLE);
        assert_eq!(traced.name(), "letters");

        let dispatcher: &dyn Dispatch<(), char> = &traced;
        assert_eq!(dispatcher.size(), 2);
        assert_eq!(dispatcher.dispatch((), 1), 'b');
    }

    #[test]
    fn test_traced_rejects_out_of_range() {
        let traced = Traced::new("letters", TABLE);
        let dispatcher: &dyn Dispatch<(), char> = &traced;
        assert_eq!(dispatcher.try_dispatch((), 0), Ok('a'));
        assert_eq!(
            dispatcher.try_dispatch((), 2),
            Err(DispatchError::OutOfRange { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_traced_over_reference() {
        let traced = Traced::new("letters", &TABLE);
        assert_eq!(traced.inner().len(), 2);
    }
}
