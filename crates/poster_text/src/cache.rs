//! Memoizing measurer
//!
//! Packing measures every candidate line while it grows and then measures the
//! committed line once more. Host measurement is usually the expensive part of
//! a layout pass (it touches live layout state), so repeated texts are served
//! from a map keyed by the exact text.

use crate::{Extent, TextMeasurer};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasureStats {
    pub hits: u64,
    pub misses: u64,
}

impl MeasureStats {
    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Wraps a measurer and remembers every extent it reports
///
/// Not `Sync`: the cache is filled through a shared reference.
#[derive(Debug)]
pub struct CachedMeasurer<M> {
    inner: M,
    entries: RefCell<HashMap<String, Extent>>,
    stats: Cell<MeasureStats>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
            stats: Cell::new(MeasureStats::default()),
        }
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> MeasureStats {
        self.stats.get()
    }

    /// Number of distinct texts cached
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop all cached extents, e.g. after the host's font changed
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.stats.set(MeasureStats::default());
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&self, text: &str) -> Extent {
        let mut stats = self.stats.get();

        if let Some(extent) = self.entries.borrow().get(text).copied() {
            stats.hits += 1;
            self.stats.set(stats);
            return extent;
        }

        let extent = self.inner.measure(text);
        self.entries.borrow_mut().insert(text.to_string(), extent);
        stats.misses += 1;
        self.stats.set(stats);
        extent
    }
}
