//! First-come-first-served.
//!
//! # Algorithm
//! Run-to-completion with [`rules::ArrivalTime`]: the earliest arrival among
//! ready processes is dispatched, ties keep input order, and each process
//! starts at `max(clock, arrival)`.
//!
//! # Complexity
//! O(n log n).

use crate::dispatching::rules;
use crate::models::{Process, Schedule};

use super::run_to_completion;

/// Schedules processes first-come-first-served.
pub fn fcfs(processes: &[Process]) -> Schedule {
    run_to_completion(processes, rules::ArrivalTime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
            Process::new("P3", 1).with_arrival(2),
        ];
        let schedule = fcfs(&processes);

        assert_eq!(schedule.completion_order(), vec!["P1", "P2", "P3"]);
        let waits: Vec<i64> = schedule.processes.iter().map(|p| p.wait_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert_eq!(schedule.makespan(), 9);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_stably() {
        let processes = vec![
            Process::new("late", 2).with_arrival(4),
            Process::new("a", 2),
            Process::new("b", 2),
        ];
        let schedule = fcfs(&processes);
        assert_eq!(schedule.completion_order(), vec!["a", "b", "late"]);

        let starts: Vec<i64> = schedule.processes.iter().map(|p| p.start_time).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("A", 2), Process::new("B", 2).with_arrival(10)];
        let schedule = fcfs(&processes);

        let b = schedule.process("B").unwrap();
        assert_eq!(b.start_time, 10);
        assert_eq!(b.wait_time, 0);
        assert_eq!(schedule.timeline.len(), 2);
    }

    #[test]
    fn test_fcfs_dispatches_in_arrival_order() {
        let processes = vec![
            Process::new("C", 1).with_arrival(6),
            Process::new("A", 4).with_arrival(1),
            Process::new("D", 2).with_arrival(6),
            Process::new("B", 9).with_arrival(2),
        ];
        let schedule = fcfs(&processes);

        let expected: Vec<&str> = crate::models::arrival_order(&processes)
            .into_iter()
            .map(|i| processes[i].id.as_str())
            .collect();
        assert_eq!(schedule.completion_order(), expected);
        // A 1-5, B 5-14, C 14-15, D 15-17
        assert_eq!(schedule.process("D").unwrap().completion_time, 17);
    }

    #[test]
    fn test_fcfs_empty() {
        assert!(fcfs(&[]).is_empty());
    }
}
