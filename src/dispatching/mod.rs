//! Scheduling policies and ready-queue selection strategies.
//!
//! A [`Policy`] names a discipline; its [`SelectionStrategy`] decides which
//! ready process runs next and for how long.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::Policy;
//!
//! let policy: Policy = "rr".parse().unwrap();
//! assert_eq!(policy, Policy::RoundRobin);
//!
//! let strategy = policy.strategy(4);
//! assert_eq!(strategy.name(), "RR");
//! assert!(strategy.is_preemptive());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod rules;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::ProcessState;

/// Quantum used when a request does not specify one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    #[serde(rename = "SJF")]
    Sjf,
    /// Quantum-preemptive Round-Robin.
    #[default]
    #[serde(rename = "RR", alias = "ROUND_ROBIN")]
    RoundRobin,
}

impl Policy {
    /// All supported policies.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::RoundRobin];

    /// Short upper-case name (`FCFS`, `SJF`, `RR`).
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "RR",
        }
    }

    /// Whether the policy consumes a time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Builds the selection strategy. `quantum` is ignored by non-RR policies.
    pub fn strategy(&self, quantum: i64) -> Box<dyn SelectionStrategy> {
        match self {
            Policy::Fcfs => Box::new(rules::Fcfs),
            Policy::Sjf => Box::new(rules::Sjf),
            Policy::RoundRobin => Box::new(rules::RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling policy '{}' (expected FCFS, SJF or RR)",
            self.0
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" | "FIFO" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "RR" | "ROUND_ROBIN" | "ROUND-ROBIN" => Ok(Policy::RoundRobin),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Chooses the next process to run from the ready queue.
///
/// # Contract
/// After [`prepare`](SelectionStrategy::prepare), the head of the queue is
/// the selected process. The engine never removes it before asking for
/// [`slice_length`](SelectionStrategy::slice_length).
pub trait SelectionStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Reorders the ready queue so that its head is the next process to run.
    fn prepare(&self, ready: &mut VecDeque<ProcessState>);

    /// CPU time granted to `selected` on this dispatch. Always ≥ 1 for
    /// validated input.
    fn slice_length(&self, selected: &ProcessState) -> i64;

    /// Whether slices may end before the process finishes.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
