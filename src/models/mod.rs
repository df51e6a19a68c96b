//! Simulation domain models.
//!
//! Provides the input record ([`Process`]) and the result types
//! ([`Schedule`], [`ScheduledProcess`], [`ExecutionSlice`]).
//!
//! | Type | Role |
//! |------|------|
//! | Process | Caller-owned input: id, arrival, burst, priority |
//! | ScheduledProcess | Process plus start/completion/wait/turnaround |
//! | ExecutionSlice | One uninterrupted CPU run |
//! | Schedule | Completion records plus CPU timeline |

mod process;
mod schedule;

pub use process::{arrival_order, Process, DEFAULT_PRIORITY};
pub use schedule::{ExecutionSlice, Schedule, ScheduledProcess};
