//! Scheduling engine and KPI evaluation.
//!
//! Runs a process set under one policy and measures the outcome.
//!
//! # Algorithm
//!
//! `Simulator` is a discrete-event stepping loop: admit arrivals, pick a
//! ready process, run it for one slice, then finalize or requeue it. The
//! clock jumps over idle gaps instead of ticking through them.
//!
//! # KPI
//!
//! `SimulationKpi` adds makespan, utilization, throughput, response time
//! and context-switch counts to the averages already in the result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Banks et al. (2010), "Discrete-Event System Simulation", Ch. 3

mod kpi;
mod request;
mod simulator;

pub use kpi::SimulationKpi;
pub use request::SimulationRequest;
pub use simulator::{simulate, Simulator};
