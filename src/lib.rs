//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling policies over a process list
//! and reports per-process wait/turnaround times and aggregate statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduledProcess`,
//!   `ExecutionSlice`, `Schedule`
//! - **`validation`**: Input integrity checks (duplicate IDs, non-positive
//!   bursts, negative arrivals/priorities)
//! - **`dispatching`**: Dispatching rules, arrival cursor and ready queue
//! - **`scheduler`**: FCFS, SJF, Priority, Round Robin, SRTF; the
//!   `Simulator` dispatcher and `Summary` statistics
//! - **`export`**: JSON import/export of process lists
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{simulate, Policy};
//!
//! let processes = vec![
//!     Process::new("A", 10),
//!     Process::new("B", 1).with_arrival(1),
//! ];
//! let report = simulate(&processes, Policy::Sjf).unwrap();
//! assert_eq!(report.schedule.process("B").unwrap().wait_time, 9);
//! assert!((report.summary.avg_wait_time - 4.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
