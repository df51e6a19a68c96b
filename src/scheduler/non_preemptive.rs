//! Non-preemptive rule-driven scheduling (SJF and Priority).
//!
//! # Algorithm
//! 1. Release every process that has arrived by the clock into the ready queue.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Otherwise dispatch the lowest-key ready process and run it to completion.
//!
//! Ties go to the earlier arrival, then the earlier input position. Long jobs
//! may starve if shorter (or more important) jobs keep arriving; that is the
//! textbook behavior of both policies.
//!
//! # Complexity
//! O(n log n).

use tracing::debug;

use crate::dispatching::{rules, Arrivals, DispatchingRule, ReadyQueue, TieBreaker};
use crate::models::{Process, Schedule};

/// Runs each selected process to completion, choosing by `rule`.
pub fn run_to_completion<R: DispatchingRule>(processes: &[Process], rule: R) -> Schedule {
    let mut schedule = Schedule::new();
    let mut arrivals = Arrivals::new(processes);
    let mut ready = ReadyQueue::new(processes, rule, TieBreaker::ArrivalThenPosition);
    let mut current_time = 0;

    loop {
        while let Some(idx) = arrivals.pop_arrived(current_time) {
            ready.push(idx, processes[idx].burst_time);
        }

        let Some(idx) = ready.pop() else {
            match arrivals.next_time() {
                Some(next) => {
                    current_time = next;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let start = current_time;
        let end = start + process.burst_time;
        debug!(
            rule = ready.rule().name(),
            process = %process.id,
            start,
            end,
            "dispatch"
        );

        schedule.record_slice(&process.id, start, end);
        schedule.complete(process, start, end);
        current_time = end;
    }

    schedule
}

/// Non-preemptive shortest-job-first.
pub fn sjf(processes: &[Process]) -> Schedule {
    run_to_completion(processes, rules::ShortestBurst)
}

/// Non-preemptive priority scheduling (lower value = higher priority).
pub fn priority(processes: &[Process]) -> Schedule {
    run_to_completion(processes, rules::HighestPriority)
}
