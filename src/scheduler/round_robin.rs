//! Round-robin scheduling.
//!
//! Each dispatch runs `min(remaining, quantum)` ticks; unfinished processes
//! go back to the tail of a FIFO queue.
//!
//! # Arrival handling
//!
//! [`RoundRobinMode::Seeded`] seeds the queue once with every process in
//! input order. On dequeue, a process whose arrival lies ahead of the clock
//! moves the clock forward to that arrival, even if another queued process
//! had already arrived. Output matches the classic browser simulator this
//! behavior comes from.
//!
//! [`RoundRobinMode::ArrivalOrdered`] is textbook round-robin: processes join
//! the queue when they arrive, arrivals during a slice are queued ahead of
//! the preempted process, and the clock only jumps when the queue is empty.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatching::Arrivals;
use crate::models::{Process, Schedule};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 4;

/// How arrivals enter the round-robin ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundRobinMode {
    /// Queue seeded once in input order; clock jumps on dequeue.
    #[default]
    Seeded,
    /// Processes enqueued as they arrive, in arrival order.
    ArrivalOrdered,
}

/// Per-process progress shared by both modes.
struct Progress {
    remaining: Vec<i64>,
    first_start: Vec<Option<i64>>,
}

impl Progress {
    fn new(processes: &[Process]) -> Self {
        Self {
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            first_start: vec![None; processes.len()],
        }
    }

    /// Runs `idx` for up to one quantum starting at `now`. Returns the new clock.
    fn run_slice(
        &mut self,
        processes: &[Process],
        schedule: &mut Schedule,
        idx: usize,
        now: i64,
        quantum: i64,
    ) -> i64 {
        let process = &processes[idx];
        let run = self.remaining[idx].min(quantum);
        let end = now + run;
        let start = *self.first_start[idx].get_or_insert(now);

        debug!(process = %process.id, from = now, to = end, "rr slice");
        schedule.record_slice(&process.id, now, end);
        self.remaining[idx] -= run;

        if self.remaining[idx] <= 0 {
            schedule.complete(process, start, end);
        }
        end
    }

    fn is_done(&self, idx: usize) -> bool {
        self.remaining[idx] <= 0
    }
}

/// Schedules processes round-robin with the given quantum and arrival mode.
///
/// # Panics
/// Panics if `quantum` is not positive.
pub fn round_robin(processes: &[Process], quantum: i64, mode: RoundRobinMode) -> Schedule {
    assert!(quantum > 0, "time quantum must be positive");
    match mode {
        RoundRobinMode::Seeded => seeded(processes, quantum),
        RoundRobinMode::ArrivalOrdered => arrival_ordered(processes, quantum),
    }
}

fn seeded(processes: &[Process], quantum: i64) -> Schedule {
    let mut schedule = Schedule::new();
    let mut progress = Progress::new(processes);
    let mut queue: VecDeque<usize> = (0..processes.len()).collect();
    let mut current_time = 0;

    while let Some(idx) = queue.pop_front() {
        current_time = current_time.max(processes[idx].arrival_time);
        current_time = progress.run_slice(processes, &mut schedule, idx, current_time, quantum);

        if !progress.is_done(idx) {
            queue.push_back(idx);
        }
    }

    schedule
}

fn arrival_ordered(processes: &[Process], quantum: i64) -> Schedule {
    let mut schedule = Schedule::new();
    let mut progress = Progress::new(processes);
    let mut arrivals = Arrivals::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut current_time = 0;

    loop {
        while let Some(idx) = arrivals.pop_arrived(current_time) {
            queue.push_back(idx);
        }

        let Some(idx) = queue.pop_front() else {
            match arrivals.next_time() {
                Some(next) => {
                    current_time = next;
                    continue;
                }
                None => break,
            }
        };

        current_time = progress.run_slice(processes, &mut schedule, idx, current_time, quantum);

        // Processes arriving during the slice queue ahead of the preempted one.
        while let Some(arrived) = arrivals.pop_arrived(current_time) {
            queue.push_back(arrived);
        }
        if !progress.is_done(idx) {
            queue.push_back(idx);
        }
    }

    schedule
}
