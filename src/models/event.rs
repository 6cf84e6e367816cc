//! Event log model.
//!
//! The log is append-only and non-decreasing in `time`. Each entry renders
//! as a one-line trace message via [`Display`](std::fmt::Display).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// What happened at a log instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A process left the backlog and joined the ready queue.
    Arrived,
    /// The CPU occupant changed to this process.
    Dispatched,
    /// The process exhausted its quantum and was requeued.
    Preempted,
    /// The process received its full burst.
    Completed,
}

/// One entry of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    /// Simulated time of the event.
    pub time: i64,
    /// Event classification.
    pub kind: EventKind,
    /// Subject process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,
    /// Ready-queue ids at dispatch time (head first). Dispatch entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_queue_snapshot: Option<Vec<ProcessId>>,
}

impl EventLogEntry {
    fn new(time: i64, kind: EventKind, process_id: ProcessId) -> Self {
        Self {
            time,
            kind,
            process_id: Some(process_id),
            ready_queue_snapshot: None,
        }
    }

    /// Arrival of `id` at `time`.
    pub fn arrived(time: i64, id: ProcessId) -> Self {
        Self::new(time, EventKind::Arrived, id)
    }

    /// Dispatch of `id` at `time` with the ready queue as it stood.
    pub fn dispatched(time: i64, id: ProcessId, ready_queue: Vec<ProcessId>) -> Self {
        Self {
            ready_queue_snapshot: Some(ready_queue),
            ..Self::new(time, EventKind::Dispatched, id)
        }
    }

    /// Quantum expiry of `id` at `time`.
    pub fn preempted(time: i64, id: ProcessId) -> Self {
        Self::new(time, EventKind::Preempted, id)
    }

    /// Completion of `id` at `time`.
    pub fn completed(time: i64, id: ProcessId) -> Self {
        Self::new(time, EventKind::Completed, id)
    }

    /// Whether this entry is of the given kind.
    pub fn is(&self, kind: EventKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Arrived => "arrived",
            EventKind::Dispatched => "dispatched",
            EventKind::Preempted => "preempted",
            EventKind::Completed => "completed",
        })
    }
}

impl fmt::Display for EventLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(id) = self.process_id else {
            return write!(f, "[t={}] {}", self.time, self.kind);
        };
        match self.kind {
            EventKind::Arrived => write!(f, "[t={}] Process {id} arrived.", self.time),
            EventKind::Dispatched => {
                write!(f, "[t={}] Process {id} started execution.", self.time)?;
                if let Some(queue) = &self.ready_queue_snapshot {
                    let ids: Vec<String> = queue.iter().map(|p| format!("P{p}")).collect();
                    write!(f, " Ready queue: [{}]", ids.join(", "))?;
                }
                Ok(())
            }
            EventKind::Preempted => write!(f, "[t={}] Process {id} time slice expired.", self.time),
            EventKind::Completed => write!(f, "[t={}] Process {id} finished.", self.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_messages() {
        assert_eq!(
            EventLogEntry::arrived(3, 2).to_string(),
            "[t=3] Process 2 arrived."
        );
        assert_eq!(
            EventLogEntry::dispatched(4, 2, vec![2, 3]).to_string(),
            "[t=4] Process 2 started execution. Ready queue: [P2, P3]"
        );
        assert_eq!(
            EventLogEntry::preempted(6, 2).to_string(),
            "[t=6] Process 2 time slice expired."
        );
        assert_eq!(
            EventLogEntry::completed(9, 2).to_string(),
            "[t=9] Process 2 finished."
        );
    }

    #[test]
    fn test_entry_wire_format() {
        let json = serde_json::to_value(EventLogEntry::completed(9, 2)).unwrap();
        assert_eq!(json["kind"], "completed");
        assert_eq!(json["processId"], 2);
        assert!(json.get("readyQueueSnapshot").is_none());

        let json = serde_json::to_value(EventLogEntry::dispatched(0, 1, vec![1, 4])).unwrap();
        assert_eq!(json["kind"], "dispatched");
        assert_eq!(json["readyQueueSnapshot"], serde_json::json!([1, 4]));
    }

    #[test]
    fn test_entry_kind_check() {
        let entry = EventLogEntry::preempted(2, 1);
        assert!(entry.is(EventKind::Preempted));
        assert!(!entry.is(EventKind::Completed));
    }
}
