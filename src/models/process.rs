//! Process models.
//!
//! A process enters the simulator as an immutable [`ProcessSpec`], is
//! tracked while it runs as a [`ProcessState`], and leaves as a fully
//! populated [`ProcessResult`].
//!
//! # Time Representation
//! All times are integer simulated-time units relative to t=0. The
//! consumer decides what a unit means (e.g. ms).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = u32;

/// Input description of a synthetic process.
///
/// Accepts both the `arrivalTime`/`burstTime` field names and the short
/// `pid`/`arrival`/`burst` forms on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSpec {
    /// Unique process identifier.
    #[serde(alias = "pid")]
    pub id: ProcessId,
    /// Time at which the process becomes ready (≥ 0).
    #[serde(alias = "arrival")]
    pub arrival_time: i64,
    /// Total CPU service time required (≥ 1).
    #[serde(alias = "burst")]
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Engine-owned view of a process during a run.
///
/// `remaining_time` only decreases, and only while the process holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// The immutable input this state was derived from.
    pub spec: ProcessSpec,
    /// Service time still owed to the process.
    pub remaining_time: i64,
    /// Time of the first dispatch. `None` until the process has run.
    pub start_time: Option<i64>,
}

impl ProcessState {
    /// Derives a fresh state from a spec.
    pub fn from_spec(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining_time: spec.burst_time,
            start_time: None,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> ProcessId {
        self.spec.id
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has received its full burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Marks the process as dispatched at `now`. Only the first call sticks.
    pub fn dispatch(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consumes `slice` units of service time.
    pub fn run_for(&mut self, slice: i64) {
        self.remaining_time -= slice;
    }

    /// Finalizes the process at `completion_time`.
    pub fn finish(self, completion_time: i64) -> ProcessResult {
        let turnaround_time = completion_time - self.spec.arrival_time;
        let start_time = self.start_time.unwrap_or(completion_time);
        ProcessResult {
            id: self.spec.id,
            arrival_time: self.spec.arrival_time,
            burst_time: self.spec.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - self.spec.burst_time,
            response_time: start_time - self.spec.arrival_time,
        }
    }
}

/// Per-process metrics of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total service time.
    pub burst_time: i64,
    /// Time of the first dispatch.
    pub start_time: i64,
    /// Time at which the last unit of service was delivered.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`: time spent ready but not running.
    pub waiting_time: i64,
    /// `start_time - arrival_time`: delay until first dispatch.
    pub response_time: i64,
}
