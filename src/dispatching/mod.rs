//! Dispatching rules and ready-queue machinery.
//!
//! A dispatching rule maps a ready process to a key; the process with the
//! lowest key runs next. The [`ReadyQueue`] keeps arrived processes indexed
//! by that key so selection does not rescan the pending set, and
//! [`Arrivals`] releases processes into it as the clock advances.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, Arrivals, ReadyQueue, TieBreaker};
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![
//!     Process::new("long", 8),
//!     Process::new("short", 2),
//! ];
//! let mut arrivals = Arrivals::new(&processes);
//! let mut ready = ReadyQueue::new(&processes, rules::ShortestBurst, TieBreaker::ArrivalThenPosition);
//! while let Some(idx) = arrivals.pop_arrived(0) {
//!     ready.push(idx, processes[idx].burst_time);
//! }
//! assert_eq!(ready.pop(), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod arrivals;
mod ready;
pub mod rules;

pub use arrivals::Arrivals;
pub use ready::{ReadyQueue, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a dispatching rule.
///
/// Lower keys = selected first.
pub type RuleKey = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** Ties are resolved by the
/// [`TieBreaker`] of the [`ReadyQueue`] holding the process.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Ranks a process given its remaining CPU time.
    fn key(&self, process: &Process, remaining: i64) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
