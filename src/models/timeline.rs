//! Execution timeline (Gantt) model.
//!
//! A timeline is a gap-free sequence of [`TimelineBlock`]s starting at t=0.
//! Each block is owned either by a process or by the idle CPU.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// Wire label of the idle subject.
pub const IDLE_LABEL: &str = "IDLE";

/// Occupant of the CPU during a timeline block.
///
/// Serializes as the bare process id, or as the string `"IDLE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SubjectRepr", try_from = "SubjectRepr")]
pub enum Subject {
    /// No process was ready.
    Idle,
    /// The given process held the CPU.
    Process(ProcessId),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SubjectRepr {
    Id(ProcessId),
    Label(String),
}

impl From<Subject> for SubjectRepr {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Idle => SubjectRepr::Label(IDLE_LABEL.to_string()),
            Subject::Process(id) => SubjectRepr::Id(id),
        }
    }
}

impl TryFrom<SubjectRepr> for Subject {
    type Error = String;

    fn try_from(repr: SubjectRepr) -> Result<Self, Self::Error> {
        match repr {
            SubjectRepr::Id(id) => Ok(Subject::Process(id)),
            SubjectRepr::Label(label) if label.eq_ignore_ascii_case(IDLE_LABEL) => {
                Ok(Subject::Idle)
            }
            SubjectRepr::Label(label) => Err(format!("unknown timeline subject '{label}'")),
        }
    }
}

impl Subject {
    /// The process id, if this is not an idle subject.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Subject::Idle => None,
            Subject::Process(id) => Some(*id),
        }
    }

    /// Whether this is the idle subject.
    pub fn is_idle(&self) -> bool {
        matches!(self, Subject::Idle)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Idle => f.write_str(IDLE_LABEL),
            Subject::Process(id) => write!(f, "P{id}"),
        }
    }
}

/// A half-open interval `[start, end)` of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBlock {
    /// Who held the CPU.
    pub subject_id: Subject,
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end. Always greater than `start`.
    pub end: i64,
}

impl TimelineBlock {
    /// Creates a block.
    pub fn new(subject_id: Subject, start: i64, end: i64) -> Self {
        Self {
            subject_id,
            start,
            end,
        }
    }

    /// Creates an idle block.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(Subject::Idle, start, end)
    }

    /// Creates a block occupied by process `id`.
    pub fn process(id: ProcessId, start: i64, end: i64) -> Self {
        Self::new(Subject::Process(id), start, end)
    }

    /// Length of the block.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Returns this block clipped to end at `until`, or `None` if it starts
    /// at or after `until`.
    pub fn clipped(&self, until: i64) -> Option<Self> {
        if self.start >= until {
            return None;
        }
        Some(Self::new(self.subject_id, self.start, self.end.min(until)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_duration() {
        assert_eq!(TimelineBlock::process(1, 3, 8).duration(), 5);
        assert_eq!(TimelineBlock::idle(0, 3).duration(), 3);
    }

    #[test]
    fn test_block_clipped() {
        let block = TimelineBlock::process(1, 4, 10);
        assert_eq!(block.clipped(6), Some(TimelineBlock::process(1, 4, 6)));
        assert_eq!(block.clipped(12), Some(block));
        assert_eq!(block.clipped(4), None);
    }

    #[test]
    fn test_subject_wire_format() {
        let json = serde_json::to_string(&TimelineBlock::idle(0, 3)).unwrap();
        assert_eq!(json, r#"{"subjectId":"IDLE","start":0,"end":3}"#);

        let json = serde_json::to_string(&TimelineBlock::process(2, 3, 5)).unwrap();
        assert_eq!(json, r#"{"subjectId":2,"start":3,"end":5}"#);

        let block: TimelineBlock =
            serde_json::from_str(r#"{"subjectId":"idle","start":0,"end":1}"#).unwrap();
        assert!(block.subject_id.is_idle());

        assert!(serde_json::from_str::<Subject>(r#""CPU""#).is_err());
    }

    #[test]
    fn test_subject_display() {
        assert_eq!(Subject::Idle.to_string(), "IDLE");
        assert_eq!(Subject::Process(4).to_string(), "P4");
        assert_eq!(Subject::Process(4).process_id(), Some(4));
        assert_eq!(Subject::Idle.process_id(), None);
    }
}
