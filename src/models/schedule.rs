//! Schedule (simulation result) model.
//!
//! A schedule records, for every process, when it first ran and when it
//! completed, together with the CPU timeline as a list of uninterrupted
//! execution slices (a Gantt chart).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// A completed process with its timing metrics.
///
/// `turnaround_time = completion_time - arrival_time` and
/// `wait_time = turnaround_time - burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledProcess {
    /// The input record.
    #[serde(flatten)]
    pub process: Process,
    /// First tick at which the process was dispatched.
    pub start_time: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub wait_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

impl ScheduledProcess {
    /// Derives the metrics for `process` from its first dispatch and completion.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process: process.clone(),
            start_time,
            completion_time,
            wait_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: start_time - process.arrival_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }
}

/// One uninterrupted run of a process on the CPU: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSlice {
    /// Running process.
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete simulation schedule.
///
/// `processes` is in completion order for preemptive and queue-based
/// policies, and in selection order for non-preemptive ones (which is the
/// same thing). `timeline` is in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completion records.
    pub processes: Vec<ScheduledProcess>,
    /// CPU execution timeline.
    pub timeline: Vec<ExecutionSlice>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution slice, merging it into the previous one when the
    /// same process continues without a gap. Empty slices are ignored.
    pub fn record_slice(&mut self, process_id: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.timeline.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.timeline.push(ExecutionSlice {
            process_id: process_id.to_string(),
            start,
            end,
        });
    }

    /// Records a process completion.
    pub fn complete(&mut self, process: &Process, start_time: i64, completion_time: i64) {
        self.processes
            .push(ScheduledProcess::new(process, start_time, completion_time));
    }

    /// Latest completion time, or 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total ticks during which some process was running.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(ExecutionSlice::duration).sum()
    }

    /// Finds the completion record for a process.
    pub fn process(&self, id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Returns all slices of a given process.
    pub fn slices_for(&self, id: &str) -> Vec<&ExecutionSlice> {
        self.timeline.iter().filter(|s| s.process_id == id).collect()
    }

    /// Process ids in output order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.processes.iter().map(ScheduledProcess::id).collect()
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
