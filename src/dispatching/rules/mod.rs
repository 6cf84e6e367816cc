//! Built-in selection strategies.
//!
//! | Strategy | Queue order | Slice |
//! |----------|-------------|-------|
//! | FCFS | insertion (arrival, then id) | full remaining burst |
//! | SJF | remaining time, arrival, id | full remaining burst |
//! | RR | FIFO, preempted processes rejoin at the tail | `min(remaining, quantum)` |
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;

use super::SelectionStrategy;
use crate::models::ProcessState;

// ======================== Non-preemptive ========================

/// First-Come-First-Served.
///
/// The ready queue is kept in insertion order and the head always runs to
/// completion.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SelectionStrategy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn prepare(&self, _ready: &mut VecDeque<ProcessState>) {}

    fn slice_length(&self, selected: &ProcessState) -> i64 {
        selected.remaining_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Non-preemptive Shortest-Job-First.
///
/// Resorts the ready queue by ascending remaining time, then arrival time,
/// then id, and runs the head to completion. A shorter job arriving while
/// another runs waits for the next selection.
///
/// # Reference
/// Smith (1956), SPT sequencing minimizes mean flow time on one machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl SelectionStrategy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn prepare(&self, ready: &mut VecDeque<ProcessState>) {
        ready.make_contiguous().sort_by(|a, b| {
            a.remaining_time
                .cmp(&b.remaining_time)
                .then_with(|| a.spec.arrival_time.cmp(&b.spec.arrival_time))
                .then_with(|| a.spec.id.cmp(&b.spec.id))
        });
    }

    fn slice_length(&self, selected: &ProcessState) -> i64 {
        selected.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}

// ======================== Preemptive ========================

/// Round-Robin with a fixed time quantum.
///
/// FIFO ready queue; every slice is bounded by the quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin strategy with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SelectionStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn prepare(&self, _ready: &mut VecDeque<ProcessState>) {}

    fn slice_length(&self, selected: &ProcessState) -> i64 {
        selected.remaining_time.min(self.quantum)
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
