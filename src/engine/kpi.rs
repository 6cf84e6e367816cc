//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy / Idle Time | Process-occupied vs. idle timeline length |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Response | Mean(first dispatch - arrival) |
//! | Context Switches | Number of dispatch events |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{EventKind, SimulationResult};

/// Run performance indicators.
///
/// All time values are in simulated-time units.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total time the CPU ran a process.
    pub busy_time: i64,
    /// Total time the CPU sat idle.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Number of times the CPU switched to a different process.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let mut busy_time = 0;
        let mut idle_time = 0;
        for block in &result.timeline {
            if block.subject_id.is_idle() {
                idle_time += block.duration();
            } else {
                busy_time += block.duration();
            }
        }

        let count = result.process_count();
        let avg_response_time = if count == 0 {
            0.0
        } else {
            let total: i64 = result.results.iter().map(|r| r.response_time).sum();
            total as f64 / count as f64
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            avg_turnaround_time: result.avg_turnaround_time,
            avg_waiting_time: result.avg_waiting_time,
            avg_response_time,
            max_waiting_time: result
                .results
                .iter()
                .map(|r| r.waiting_time)
                .max()
                .unwrap_or(0),
            context_switches: result
                .log
                .iter()
                .filter(|e| e.is(EventKind::Dispatched))
                .count(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::Policy;
    use crate::engine::simulate;
    use crate::models::ProcessSpec;

    #[test]
    fn test_kpi_fcfs() {
        let specs = vec![
            ProcessSpec::new(1, 0, 4),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 2),
        ];
        let kpi = SimulationKpi::calculate(&simulate(&specs, 2, Policy::Fcfs).unwrap());

        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.busy_time, 9);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
        // Response: 0, 3, 5 (equal to waiting under FCFS)
        assert!((kpi.avg_response_time - 8.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 5);
        assert_eq!(kpi.context_switches, 3);
    }

    #[test]
    fn test_kpi_idle_time() {
        let specs = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 6, 2)];
        let kpi = SimulationKpi::calculate(&simulate(&specs, 2, Policy::Fcfs).unwrap());

        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert_eq!(kpi.busy_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_round_robin_response() {
        let specs = vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 8),
        ];
        let kpi = SimulationKpi::calculate(&simulate(&specs, 2, Policy::RoundRobin).unwrap());

        // First dispatches at 0, 2, 4 → response 0, 1, 2
        assert!((kpi.avg_response_time - 1.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 8);
        assert_eq!(kpi.max_waiting_time, 7);
    }

    #[test]
    fn test_kpi_empty() {
        let empty = SimulationResult::new(Vec::new(), Vec::new(), Vec::new());
        let kpi = SimulationKpi::calculate(&empty);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 0);
    }

    #[test]
    fn test_meets_thresholds() {
        let specs = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 6, 2)];
        let kpi = SimulationKpi::calculate(&simulate(&specs, 2, Policy::Fcfs).unwrap());
        assert!(kpi.meets_thresholds(0.0, 0.5));
        assert!(!kpi.meets_thresholds(0.0, 0.6));
    }
}
