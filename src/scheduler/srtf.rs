//! Preemptive shortest-job-first (shortest remaining time first).
//!
//! # Algorithm
//! Event-driven: the running process can only change when a process arrives
//! or completes, so the ready queue is consulted only at those instants.
//!
//! 1. Release arrivals up to the clock into a ready queue keyed by remaining time.
//! 2. Run the head until it completes or the next arrival, whichever is first.
//! 3. Re-rank it with its new remaining time and repeat.
//!
//! Equal remaining times go to the process listed first in the input, so the
//! result is identical to stepping one tick at a time with a first-found scan.
//!
//! # Complexity
//! O(n log n) instead of O(total_burst × n) for unit stepping.

use tracing::debug;

use crate::dispatching::{rules, Arrivals, ReadyQueue, TieBreaker};
use crate::models::{Process, Schedule};

/// Schedules processes shortest-remaining-time-first.
pub fn srtf(processes: &[Process]) -> Schedule {
    let mut schedule = Schedule::new();
    let mut arrivals = Arrivals::new(processes);
    let mut ready = ReadyQueue::new(processes, rules::ShortestRemaining, TieBreaker::Position);
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_start: Vec<Option<i64>> = vec![None; processes.len()];
    let mut current_time = 0;

    loop {
        while let Some(idx) = arrivals.pop_arrived(current_time) {
            ready.push(idx, remaining[idx]);
        }

        let Some(idx) = ready.peek() else {
            match arrivals.next_time() {
                Some(next) => {
                    current_time = next;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let finish = current_time + remaining[idx];
        let run_until = arrivals.next_time().map_or(finish, |next| next.min(finish));
        let start = *first_start[idx].get_or_insert(current_time);

        debug!(process = %process.id, from = current_time, to = run_until, "srtf run");
        schedule.record_slice(&process.id, current_time, run_until);
        remaining[idx] -= run_until - current_time;
        current_time = run_until;

        if remaining[idx] <= 0 {
            ready.pop();
            schedule.complete(process, start, current_time);
        } else {
            ready.update(idx, remaining[idx]);
        }
    }

    schedule
}
