//! CPU scheduling domain models.
//!
//! Provides the data types flowing into and out of the simulator.
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `ProcessSpec` | caller |
//! | In flight | `ProcessState` | engine (backlog → ready queue → CPU) |
//! | Finished | `ProcessResult` | `SimulationResult` |
//!
//! Every run builds these fresh; nothing is shared between runs.

mod event;
mod process;
mod result;
mod timeline;

pub use event::{EventKind, EventLogEntry};
pub use process::{ProcessId, ProcessResult, ProcessSpec, ProcessState};
pub use result::SimulationResult;
pub use timeline::{Subject, TimelineBlock, IDLE_LABEL};
