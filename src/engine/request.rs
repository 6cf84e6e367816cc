//! Simulation request (run configuration).

use serde::{Deserialize, Serialize};

use crate::dispatching::{Policy, DEFAULT_QUANTUM};
use crate::models::{ProcessSpec, SimulationResult};
use crate::validation::SimulationError;

use super::Simulator;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for one simulation run.
///
/// Deserializes from the request body front ends send:
///
/// ```
/// use u_cpusched::dispatching::Policy;
/// use u_cpusched::engine::SimulationRequest;
///
/// let request: SimulationRequest = serde_json::from_str(
///     r#"{"processes": [{"id": 1, "arrivalTime": 0, "burstTime": 3}], "policy": "SJF"}"#,
/// ).unwrap();
/// assert_eq!(request.policy, Policy::Sjf);
/// assert_eq!(request.quantum, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Round-Robin time quantum (default: 2).
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Scheduling discipline (default: RR).
    #[serde(default, alias = "algorithm")]
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a request with the default policy and quantum.
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self {
            processes,
            quantum: DEFAULT_QUANTUM,
            policy: Policy::default(),
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the scheduling policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Runs the request.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        Simulator::from_request(self).run(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_request_builder() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(ProcessSpec::new(1, 0, 4))
            .with_process(ProcessSpec::new(2, 1, 3))
            .with_policy(Policy::Fcfs)
            .with_quantum(5);

        assert_eq!(request.processes.len(), 2);
        assert_eq!(request.policy, Policy::Fcfs);
        assert_eq!(request.quantum, 5);
    }

    #[test]
    fn test_request_defaults() {
        let request = SimulationRequest::new(vec![ProcessSpec::new(1, 0, 1)]);
        assert_eq!(request.policy, Policy::RoundRobin);
        assert_eq!(request.quantum, DEFAULT_QUANTUM);
    }

    #[test]
    fn test_request_from_legacy_body() {
        let body = r#"{
            "processes": [
                {"pid": 1, "arrival": 0, "burst": 5},
                {"pid": 2, "arrival": 1, "burst": 3}
            ],
            "quantum": 3,
            "algorithm": "RR"
        }"#;
        let request: SimulationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.quantum, 3);
        assert_eq!(request.policy, Policy::RoundRobin);
        assert_eq!(request.processes[1], ProcessSpec::new(2, 1, 3));
    }

    #[test]
    fn test_request_run() {
        let result = SimulationRequest::new(vec![ProcessSpec::new(1, 3, 2)])
            .with_policy(Policy::Fcfs)
            .run()
            .unwrap();
        assert_eq!(result.makespan(), 5);
    }

    #[test]
    fn test_request_run_invalid() {
        let err = SimulationRequest::new(Vec::new()).run().unwrap_err();
        assert_eq!(err.errors()[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_end_to_end_json() {
        let body = r#"{"processes": [{"id": 1, "arrivalTime": 3, "burstTime": 2}], "policy": "FCFS"}"#;
        let request: SimulationRequest = serde_json::from_str(body).unwrap();
        let response = serde_json::to_value(request.run().unwrap()).unwrap();

        assert_eq!(response["timeline"][0]["subjectId"], "IDLE");
        assert_eq!(response["timeline"][1]["subjectId"], 1);
        assert_eq!(response["results"][0]["completionTime"], 5);
        assert_eq!(response["log"][0]["kind"], "arrived");
        assert_eq!(response["log"][0]["time"], 3);
        assert_eq!(response["avgWaitingTime"], 0.0);
    }
}
