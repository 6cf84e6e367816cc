//! Discrete-event scheduling simulator.
//!
//! # Algorithm
//!
//! Repeats until backlog and ready queue are both empty:
//!
//! 1. Admit every backlog process with `arrival_time <= now`.
//! 2. If nothing is ready, record an idle block up to the next arrival and
//!    jump the clock there.
//! 3. Let the strategy order the ready queue; its head is selected.
//! 4. Run the head for one slice (whole burst, or up to the quantum for RR).
//! 5. Admit arrivals that happened during the slice, then either finalize
//!    the process or requeue it at the tail.
//!
//! Arrivals landing exactly when a quantum expires are queued ahead of the
//! preempted process.
//!
//! # Complexity
//! O(k · n log n) for SJF and O(k + n log n) otherwise, where k is the number
//! of slices (≤ total burst time).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;

use log::{debug, trace};

use crate::dispatching::{Policy, SelectionStrategy, DEFAULT_QUANTUM};
use crate::models::{
    EventLogEntry, ProcessId, ProcessResult, ProcessSpec, ProcessState, SimulationResult, Subject,
    TimelineBlock,
};
use crate::validation::{validate_input, SimulationError};

use super::SimulationRequest;

/// Runs one simulation.
///
/// `quantum` is only consulted for [`Policy::RoundRobin`].
///
/// # Errors
/// [`SimulationError::InvalidInput`] if `specs` is empty, has duplicate
/// ids, a negative arrival, a non-positive burst, a clock horizon beyond
/// `i64::MAX`, or (RR) `quantum < 1`.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::Policy;
/// use u_cpusched::engine::simulate;
/// use u_cpusched::models::{ProcessSpec, TimelineBlock};
///
/// let specs = vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 1, 3)];
/// let result = simulate(&specs, 2, Policy::Fcfs).unwrap();
///
/// assert_eq!(
///     result.timeline,
///     vec![TimelineBlock::process(1, 0, 4), TimelineBlock::process(2, 4, 7)]
/// );
/// assert_eq!(result.result_for(2).unwrap().waiting_time, 3);
/// ```
pub fn simulate(
    specs: &[ProcessSpec],
    quantum: i64,
    policy: Policy,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(policy).with_quantum(quantum).run(specs)
}

/// Configured simulator for one policy.
///
/// Holds no state between runs; the same simulator can be reused for any
/// number of independent process sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
    quantum: i64,
}

impl Simulator {
    /// Creates a simulator with the default quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Validates `specs` and runs them to completion.
    pub fn run(&self, specs: &[ProcessSpec]) -> Result<SimulationResult, SimulationError> {
        validate_input(specs, self.policy, self.quantum)?;

        let strategy = self.policy.strategy(self.quantum);
        debug!(
            "simulating {} processes: {} (preemptive={}), quantum={}",
            specs.len(),
            strategy.description(),
            strategy.is_preemptive(),
            self.quantum
        );

        let result = Run::new(strategy.as_ref(), specs).execute();

        debug!(
            "simulation finished: policy={}, makespan={}, avg_turnaround={:.2}, avg_waiting={:.2}",
            self.policy,
            result.makespan(),
            result.avg_turnaround_time,
            result.avg_waiting_time
        );
        Ok(result)
    }

    /// Creates a simulator with the policy and quantum of `request`.
    pub fn from_request(request: &SimulationRequest) -> Self {
        Self::new(request.policy).with_quantum(request.quantum)
    }
}

/// Private state of a single run.
struct Run<'a> {
    strategy: &'a dyn SelectionStrategy,
    /// Not yet arrived, ascending by (arrival, id).
    backlog: VecDeque<ProcessState>,
    ready: VecDeque<ProcessState>,
    finished: Vec<ProcessResult>,
    timeline: Vec<TimelineBlock>,
    log: Vec<EventLogEntry>,
    now: i64,
    /// Current CPU occupant, for dispatch de-duplication.
    occupant: Option<ProcessId>,
}

impl<'a> Run<'a> {
    fn new(strategy: &'a dyn SelectionStrategy, specs: &[ProcessSpec]) -> Self {
        let mut ordered: Vec<ProcessSpec> = specs.to_vec();
        ordered.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        Self {
            strategy,
            backlog: ordered.into_iter().map(ProcessState::from_spec).collect(),
            ready: VecDeque::with_capacity(specs.len()),
            finished: Vec::with_capacity(specs.len()),
            timeline: Vec::new(),
            log: Vec::new(),
            now: 0,
            occupant: None,
        }
    }

    fn execute(mut self) -> SimulationResult {
        loop {
            self.admit_arrivals();

            if self.ready.is_empty() {
                let Some(next_arrival) = self.backlog.front().map(|p| p.spec.arrival_time) else {
                    break;
                };
                debug!("t={}: cpu idle until {}", self.now, next_arrival);
                self.record(Subject::Idle, self.now, next_arrival);
                self.now = next_arrival;
                self.occupant = None;
                continue;
            }

            self.strategy.prepare(&mut self.ready);
            let Some(head) = self.ready.front() else {
                break;
            };
            let slice = self.strategy.slice_length(head);
            let snapshot: Vec<ProcessId> = self.ready.iter().map(ProcessState::id).collect();
            let Some(mut current) = self.ready.pop_front() else {
                break;
            };
            let id = current.id();
            let start = self.now;

            current.dispatch(start);
            if self.occupant != Some(id) {
                debug!("t={start}: dispatch P{id} for {slice} (ready: {snapshot:?})");
                self.log.push(EventLogEntry::dispatched(start, id, snapshot));
            }
            self.record(Subject::Process(id), start, start + slice);

            self.now += slice;
            current.run_for(slice);
            self.occupant = Some(id);

            // Arrivals during the slice precede its completion/preemption in
            // the log, and same-instant arrivals precede the requeue.
            self.admit_arrivals();

            if current.is_finished() {
                debug!("t={}: P{id} completed", self.now);
                self.log.push(EventLogEntry::completed(self.now, id));
                self.finished.push(current.finish(self.now));
                self.occupant = None;
            } else {
                debug!(
                    "t={}: P{id} preempted, {} remaining",
                    self.now, current.remaining_time
                );
                self.log.push(EventLogEntry::preempted(self.now, id));
                self.ready.push_back(current);
            }
        }

        SimulationResult::new(self.finished, self.timeline, self.log)
    }

    /// Moves arrived backlog processes to the ready-queue tail.
    fn admit_arrivals(&mut self) {
        while self
            .backlog
            .front()
            .is_some_and(|p| p.spec.arrival_time <= self.now)
        {
            let Some(process) = self.backlog.pop_front() else {
                break;
            };
            trace!(
                "t={}: P{} arrived at {}",
                self.now,
                process.id(),
                process.spec.arrival_time
            );
            self.log
                .push(EventLogEntry::arrived(process.spec.arrival_time, process.id()));
            self.ready.push_back(process);
        }
    }

    /// Appends `[start, end)` to the timeline, extending the last block
    /// instead when it has the same subject and ends at `start`.
    fn record(&mut self, subject: Subject, start: i64, end: i64) {
        if let Some(last) = self.timeline.last_mut() {
            if last.subject_id == subject && last.end == start {
                last.end = end;
                return;
            }
        }
        self.timeline.push(TimelineBlock::new(subject, start, end));
    }
}
