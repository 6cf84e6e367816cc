//! Synthetic workload generation.
//!
//! Produces reproducible process sets for demos, benchmarks and randomized
//! tests. Arrivals are spaced by a uniformly drawn gap; bursts are drawn
//! uniformly from a range. Ids run `1..=count` in arrival order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{ProcessId, ProcessSpec};

/// Generator of random [`ProcessSpec`] sets.
///
/// # Example
///
/// ```
/// use u_cpusched::generator::WorkloadGenerator;
///
/// let specs = WorkloadGenerator::new(5)
///     .with_arrival_gap(0, 3)
///     .with_burst_range(1, 8)
///     .generate_seeded(7);
///
/// assert_eq!(specs.len(), 5);
/// assert!(specs.iter().all(|p| (1..=8).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    min_gap: i64,
    max_gap: i64,
    min_burst: i64,
    max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with gaps in `[0, 3]` and
    /// bursts in `[1, 10]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_gap: 0,
            max_gap: 3,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the inclusive range of time between consecutive arrivals.
    /// Negative bounds are raised to 0.
    pub fn with_arrival_gap(mut self, min: i64, max: i64) -> Self {
        let (lo, hi) = ordered(min.max(0), max.max(0));
        self.min_gap = lo;
        self.max_gap = hi;
        self
    }

    /// Sets the inclusive burst range. Bounds below 1 are raised to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let (lo, hi) = ordered(min.max(1), max.max(1));
        self.min_burst = lo;
        self.max_burst = hi;
        self
    }

    /// Number of processes generated per call.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generates a process set from `rng`.
    ///
    /// The first process arrives after one gap from t=0.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let mut arrival = 0;
        (1..=self.count)
            .map(|n| {
                arrival += rng.random_range(self.min_gap..=self.max_gap);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessSpec::new(n as ProcessId, arrival, burst)
            })
            .collect()
    }

    /// Generates a process set from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
