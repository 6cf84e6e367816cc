//! Simulation result (terminal snapshot).
//!
//! Built once at the end of a run and never mutated afterwards. Playback
//! layers step through it with [`SimulationResult::timeline_until`] and
//! [`SimulationResult::log_until`] instead of re-running the engine.

use serde::{Deserialize, Serialize};

use super::{EventKind, EventLogEntry, ProcessId, ProcessResult, TimelineBlock};

/// Outcome of one simulation run.
///
/// Serializes to the response shape consumed by front ends:
/// `results`, `timeline`, `log`, `avgTurnaroundTime`, `avgWaitingTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Finished processes, ascending by id.
    pub results: Vec<ProcessResult>,
    /// Gap-free CPU occupancy over `[0, makespan)`.
    pub timeline: Vec<TimelineBlock>,
    /// Ordered event log.
    pub log: Vec<EventLogEntry>,
    /// Mean turnaround time over all processes.
    pub avg_turnaround_time: f64,
    /// Mean waiting time over all processes.
    pub avg_waiting_time: f64,
}

impl SimulationResult {
    /// Assembles a result, ordering `results` by id and computing averages.
    pub fn new(
        mut results: Vec<ProcessResult>,
        timeline: Vec<TimelineBlock>,
        log: Vec<EventLogEntry>,
    ) -> Self {
        results.sort_by_key(|r| r.id);
        let avg_turnaround_time = mean(results.iter().map(|r| r.turnaround_time));
        let avg_waiting_time = mean(results.iter().map(|r| r.waiting_time));
        Self {
            results,
            timeline,
            log,
            avg_turnaround_time,
            avg_waiting_time,
        }
    }

    /// Metrics for process `id`.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Timeline blocks owned by process `id`, in time order.
    pub fn blocks_for(&self, id: ProcessId) -> Vec<&TimelineBlock> {
        self.timeline
            .iter()
            .filter(|b| b.subject_id.process_id() == Some(id))
            .collect()
    }

    /// Total CPU time granted to process `id`.
    pub fn service_time_for(&self, id: ProcessId) -> i64 {
        self.blocks_for(id).iter().map(|b| b.duration()).sum()
    }

    /// Process ids in the order they completed.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.log
            .iter()
            .filter(|e| e.is(EventKind::Completed))
            .filter_map(|e| e.process_id)
            .collect()
    }

    /// Latest completion time (end of the timeline).
    pub fn makespan(&self) -> i64 {
        self.timeline.last().map(|b| b.end).unwrap_or(0)
    }

    /// The timeline as it stood at time `t`, with the running block clipped.
    pub fn timeline_until(&self, t: i64) -> Vec<TimelineBlock> {
        self.timeline.iter().filter_map(|b| b.clipped(t)).collect()
    }

    /// Log entries with `time <= t`.
    pub fn log_until(&self, t: i64) -> &[EventLogEntry] {
        let end = self.log.partition_point(|e| e.time <= t);
        &self.log[..end]
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
