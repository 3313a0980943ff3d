//! Bounded top-K selection.
//!
//! [`TopKSelector`] keeps the `K` largest [`Measurement`]s offered to it
//! without holding the rest. Internally it is a min-heap of at most `K`
//! entries whose root is the current weakest candidate, so each offer costs
//! `O(log K)`.
//!
//! Ordering is by metric, descending. Equal metrics keep discovery order: an
//! entry offered earlier ranks above a later one with the same metric, and a
//! later equal-metric offer never displaces anything once the selector is
//! full.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    path::PathBuf,
};

use serde::Serialize;

/// A measured directory or file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Measured value (a count, or a size in megabytes)
    pub metric: f64,

    /// Directory or file the value belongs to
    pub path: PathBuf,
}

impl Measurement {
    #[must_use]
    pub fn new(metric: f64, path: impl Into<PathBuf>) -> Self {
        Self {
            metric,
            path: path.into(),
        }
    }
}

/// A measurement tagged with the order it was offered in.
///
/// `Ord` ranks "better" as greater: a larger metric wins, and on equal
/// metrics the earlier offer wins.
#[derive(Debug)]
struct Ranked {
    sequence: u64,
    measurement: Measurement,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.measurement
            .metric
            .total_cmp(&other.measurement.metric)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Keeps the `K` largest measurements seen so far.
#[derive(Debug)]
pub struct TopKSelector {
    capacity: usize,
    next_sequence: u64,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopKSelector {
    /// Create an empty selector that retains at most `capacity` entries.
    ///
    /// A capacity of zero retains nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_sequence: 0,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Maximum number of retained entries (K).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a measurement.
    ///
    /// While below capacity every offer is kept. At capacity the offer
    /// replaces the weakest retained entry only if its metric is strictly
    /// greater; otherwise it is discarded.
    ///
    /// Returns whether the measurement was retained.
    pub fn offer(&mut self, measurement: Measurement) -> bool {
        let ranked = Ranked {
            sequence: self.next_sequence,
            measurement,
        };
        self.next_sequence += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(ranked));
            return true;
        }

        let Some(mut weakest) = self.heap.peek_mut() else {
            return false;
        };

        if ranked.measurement.metric > weakest.0.measurement.metric {
            *weakest = Reverse(ranked);
            true
        } else {
            false
        }
    }

    /// Snapshot of the retained entries, best first.
    #[must_use]
    pub fn result(&self) -> Vec<Measurement> {
        let mut ranked: Vec<&Ranked> = self.heap.iter().map(|Reverse(r)| r).collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked.into_iter().map(|r| r.measurement.clone()).collect()
    }

    /// Consume the selector and return the retained entries, best first.
    #[must_use]
    pub fn into_result(self) -> Vec<Measurement> {
        // Ascending in `Reverse<Ranked>` is best-first in `Ranked`.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(r)| r.measurement)
            .collect()
    }
}

impl Extend<Measurement> for TopKSelector {
    fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        for measurement in iter {
            self.offer(measurement);
        }
    }
}
