//! First-failure aggregation across parallel workers
//!
//! Construction workers share exactly one piece of mutable state: the
//! aggregated failure status. [`FirstFailure`] is a mutex-guarded
//! write-once cell; a recorded error is never overwritten by a later one,
//! and workers keep running to completion regardless. The caller joins
//! every worker before asking for the aggregated result, so the barrier
//! lives at the dispatch site, not here.

use std::sync::Mutex;

/// A write-once error cell shared by parallel workers
///
/// # Example
/// ```
/// use qbatch_engine::collector::FirstFailure;
///
/// let failure = FirstFailure::new();
/// assert!(failure.record("first"));
/// assert!(!failure.record("second"));
/// assert_eq!(failure.into_result(), Err("first"));
/// ```
#[derive(Debug, Default)]
pub struct FirstFailure<E> {
    slot: Mutex<Option<E>>,
}

impl<E> FirstFailure<E> {
    /// Create an empty cell
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Record an error unless one is already present
    ///
    /// Returns `true` if this error was stored, `false` if an earlier
    /// failure already won.
    pub fn record(&self, error: E) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| {
            // A worker panicking while holding the lock leaves the stored
            // status intact; keep honoring first-failure-wins.
            poisoned.into_inner()
        });
        if slot.is_none() {
            *slot = Some(error);
            true
        } else {
            false
        }
    }

    /// Whether any failure has been recorded so far
    pub fn is_set(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Consume the cell, yielding the aggregated status
    ///
    /// Call only after every dispatched worker has completed.
    pub fn into_result(self) -> Result<(), E> {
        match self.slot.into_inner() {
            Ok(Some(error)) => Err(error),
            Ok(None) => Ok(()),
            Err(poisoned) => match poisoned.into_inner() {
                Some(error) => Err(error),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_cell_is_ok() {
        let failure: FirstFailure<String> = FirstFailure::new();
        assert!(!failure.is_set());
        assert_eq!(failure.into_result(), Ok(()));
    }

    #[test]
    fn test_first_error_wins() {
        let failure = FirstFailure::new();
        assert!(failure.record(1));
        assert!(!failure.record(2));
        assert!(!failure.record(3));
        assert_eq!(failure.into_result(), Err(1));
    }

    #[test]
    fn test_exactly_one_recording_succeeds_under_contention() {
        let failure = Arc::new(FirstFailure::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let failure = Arc::clone(&failure);
            handles.push(thread::spawn(move || failure.record(i)));
        }

        let wins: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum();
        assert_eq!(wins, 1);

        let failure = Arc::try_unwrap(failure).unwrap();
        assert!(failure.into_result().is_err());
    }
}
