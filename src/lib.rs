//! Discrete-event CPU scheduling simulator.
//!
//! Runs a finite set of synthetic processes under First-Come-First-Served,
//! non-preemptive Shortest-Job-First, or Round-Robin and reports:
//! - a gap-free execution timeline (process or idle per interval),
//! - an ordered event log (arrivals, dispatches, preemptions, completions),
//! - per-process completion, turnaround and waiting times with averages.
//!
//! Each call is a pure function of its inputs: no I/O, no state carried
//! between runs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessState`,
//!   `ProcessResult`, `TimelineBlock`, `EventLogEntry`, `SimulationResult`
//! - **`dispatching`**: `Policy` and the `SelectionStrategy` implementations
//! - **`engine`**: `simulate`, `Simulator`, `SimulationRequest`, `SimulationKpi`
//! - **`validation`**: Input integrity checks and `SimulationError`
//! - **`generator`**: Seeded synthetic workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::dispatching::Policy;
//! use u_cpusched::engine::simulate;
//! use u_cpusched::models::ProcessSpec;
//!
//! let specs = vec![
//!     ProcessSpec::new(1, 0, 5),
//!     ProcessSpec::new(2, 1, 3),
//!     ProcessSpec::new(3, 2, 8),
//! ];
//! let result = simulate(&specs, 2, Policy::RoundRobin).unwrap();
//! assert_eq!(result.completion_order(), vec![2, 1, 3]);
//! assert!((result.avg_waiting_time - 6.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod engine;
pub mod generator;
pub mod models;
pub mod validation;
