//! Testing utilities for switchboard.
//!
//! Handler families with observably distinct behaviour per index, to verify
//! that a dispatcher reaches the handler its discriminator names.
//!
//! # Features
//!
//! - [`Echo`]: A family whose handler for `I` returns `I`
//! - [`Record`]: A family whose handler for `I` appends `I` to an [`IndexLog`]
//! - [`IndexLog`]: A shared, inspectable log of handler invocations

use std::sync::{Arc, Mutex};
use switchboard_core::Execute;

// ============================================================================
// Echo
// ============================================================================

/// A handler family returning its own discriminator.
///
/// # Example
///
/// ```rust
/// use switchboard_core::Execute;
/// use switchboard_std::testing::Echo;
///
/// assert_eq!(<Echo as Execute<5, ()>>::execute(()), 5);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Echo;

impl<const I: usize> Execute<I, ()> for Echo {
    type Output = usize;

    #[inline]
    fn execute(_: ()) -> usize {
        I
    }
}

// ============================================================================
// Recording
// ============================================================================

/// A log of the discriminators whose handlers ran, in call order.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct IndexLog {
    entries: Arc<Mutex<Vec<usize>>>,
}

impl IndexLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a discriminator.
    pub fn push(&self, index: usize) {
        self.entries.lock().unwrap().push(index);
    }

    /// Get a clone of the recorded discriminators.
    pub fn entries(&self) -> Vec<usize> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Get the number of recorded invocations of the handler for `index`.
    pub fn count_of(&self, index: usize) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|&&seen| seen == index)
            .count()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// A handler family that records its discriminator in the given log.
#[derive(Clone, Copy, Debug, Default)]
pub struct Record;

impl<'a, const I: usize> Execute<I, (&'a IndexLog,)> for Record {
    type Output = ();

    #[inline]
    fn execute((log,): (&'a IndexLog,)) {
        log.push(I);
    }
}

#[cfg(test)]
mod tests {
    use super::{Echo, IndexLog, Record};
    use switchboard_core::Execute;

    #[test]
    fn test_echo() {
        assert_eq!(<Echo as Execute<0, ()>>::execute(()), 0);
        assert_eq!(<Echo as Execute<12, ()>>::execute(()), 12);
    }

    #[test]
    fn test_record_appends_index() {
        let log = IndexLog::new();
        <Record as Execute<2, _>>::execute((&log,));
        <Record as Execute<0, _>>::execute((&log,));
        <Record as Execute<2, _>>::execute((&log,));

        assert_eq!(log.entries(), vec![2, 0, 2]);
        assert_eq!(log.count(), 3);
        assert_eq!(log.count_of(2), 2);
        assert_eq!(log.count_of(1), 0);
    }

    #[test]
    fn test_log_clones_share_state() {
        let log = IndexLog::new();
        let view = log.clone();
        log.push(4);
        assert_eq!(view.entries(), vec![4]);
        view.clear();
        assert_eq!(log.count(), 0);
    }
}
