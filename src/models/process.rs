//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It becomes eligible at its arrival time and needs `burst_time` units
//! of CPU to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Priority assigned when none is given (lower value = higher priority).
pub const DEFAULT_PRIORITY: i32 = 1;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer simulation ticks relative to t=0.
///
/// # Serialization
/// Fields serialize in camelCase in the order `id`, `arrivalTime`,
/// `burstTime`, `priority`. A missing `priority` defaults to
/// [`DEFAULT_PRIORITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier within a simulation run.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl Process {
    /// Creates a process with the given id and burst, arriving at t=0.
    pub fn new(id: impl Into<String>, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// Returns indices into `processes` ordered by arrival time.
///
/// The sort is stable, so processes arriving together keep input order.
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
