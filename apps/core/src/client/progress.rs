//! Synthetic progress estimate for an in-flight run.
//!
//! The value is cosmetic: it rises by a small random increment on each poll
//! tick independent of actual remote progress, stays below 100 while the job
//! is in flight, and snaps to 100 only on terminal success.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use rand::Rng;

/// Ceiling while the job is still running.
const IN_FLIGHT_CAP: u8 = 95;
const MAX_STEP: u8 = 9;

/// Clonable observer handle; all clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    value: Arc<AtomicU8>,
}

impl Progress {
    /// Current estimate in [0, 100].
    pub fn get(&self) -> u8 {
        self.value.load(Ordering::Relaxed)
    }

    pub(crate) fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }

    /// One tick: add a small random increment, capped below 100.
    pub(crate) fn advance(&self) {
        let step = rand::thread_rng().gen_range(1..=MAX_STEP);
        let _ = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(step).min(IN_FLIGHT_CAP))
            });
    }

    pub(crate) fn finish(&self) {
        self.value.store(100, Ordering::Relaxed);
    }
}
