//! Scheduling policies, the simulation dispatcher and summary statistics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among arrived |
//! | Priority | no | lowest priority value among arrived |
//! | Round Robin | yes (quantum) | FIFO ready queue |
//! | Preemptive SJF | yes | shortest remaining time |
//!
//! Each policy consumes an immutable process slice and returns a fresh
//! [`Schedule`](crate::models::Schedule). [`Simulator`] validates input,
//! dispatches to a [`Policy`] and summarizes the result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod non_preemptive;
mod policy;
mod round_robin;
mod simulator;
mod srtf;

pub use fcfs::fcfs;
pub use kpi::Summary;
pub use non_preemptive::{priority, run_to_completion, sjf};
pub use policy::Policy;
pub use round_robin::{round_robin, RoundRobinMode, DEFAULT_QUANTUM};
pub use simulator::{simulate, SimulationReport, Simulator};
pub use srtf::srtf;
