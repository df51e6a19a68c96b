//! Schedule summary statistics.
//!
//! Reduces a completed schedule to the aggregate metrics shown alongside the
//! per-process table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Wait | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | round(Σ burst / (max completion - min arrival) × 100) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Aggregate statistics for one simulation run.
///
/// An empty schedule yields all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of completed processes.
    pub count: usize,
    /// Mean wait time.
    pub avg_wait_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Share of the span from first arrival to last completion spent
    /// executing, as a rounded percentage.
    pub cpu_utilization: u32,
}

impl Summary {
    /// Computes the summary of a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let records = &schedule.processes;
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len();
        let n = count as f64;
        // Per-process times are bounded by the validated horizon, their sums are not.
        let mut total_wait: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut total_burst: i64 = 0;
        let mut first_arrival = i64::MAX;
        let mut last_completion = i64::MIN;

        for r in records {
            total_wait += r.wait_time as f64;
            total_turnaround += r.turnaround_time as f64;
            total_response += r.response_time as f64;
            total_burst = total_burst.saturating_add(r.process.burst_time);
            first_arrival = first_arrival.min(r.process.arrival_time);
            last_completion = last_completion.max(r.completion_time);
        }

        Self {
            count,
            avg_wait_time: total_wait / n,
            avg_turnaround_time: total_turnaround / n,
            avg_response_time: total_response / n,
            makespan: last_completion,
            cpu_utilization: utilization_percent(
                total_burst,
                last_completion.saturating_sub(first_arrival),
            ),
        }
    }
}

/// `round(busy / span × 100)`, or 0 when the span is empty.
fn utilization_percent(busy: i64, span: i64) -> u32 {
    if span <= 0 || busy <= 0 {
        return 0;
    }
    let percent = (busy as f64 / span as f64 * 100.0).round();
    if percent.is_finite() {
        percent as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_summary_basic() {
        let mut schedule = Schedule::new();
        let a = Process::new("A", 5);
        let b = Process::new("B", 5);
        schedule.complete(&a, 0, 9);
        schedule.complete(&b, 4, 10);

        let summary = Summary::calculate(&schedule);
        assert_eq!(summary.count, 2);
        assert!(approx(summary.avg_wait_time, 4.5)); // (4 + 5) / 2
        assert!(approx(summary.avg_turnaround_time, 9.5)); // (9 + 10) / 2
        assert!(approx(summary.avg_response_time, 2.0)); // (0 + 4) / 2
        assert_eq!(summary.makespan, 10);
        assert_eq!(summary.cpu_utilization, 100);
    }

    #[test]
    fn test_utilization_with_idle_gap() {
        let mut schedule = Schedule::new();
        schedule.complete(&Process::new("A", 2), 0, 2);
        schedule.complete(&Process::new("B", 1).with_arrival(5), 5, 6);

        // 3 busy ticks over a span of 6 → 50%
        assert_eq!(Summary::calculate(&schedule).cpu_utilization, 50);
    }

    #[test]
    fn test_utilization_rounds() {
        let mut schedule = Schedule::new();
        schedule.complete(&Process::new("A", 2), 0, 2);
        schedule.complete(&Process::new("B", 1).with_arrival(2), 2, 3);
        schedule.complete(&Process::new("C", 1).with_arrival(5), 5, 6);

        // 4 / 6 = 66.67% → 67
        assert_eq!(Summary::calculate(&schedule).cpu_utilization, 67);
    }

    #[test]
    fn test_utilization_measured_from_first_arrival() {
        let mut schedule = Schedule::new();
        schedule.complete(&Process::new("A", 4).with_arrival(10), 10, 14);
        assert_eq!(Summary::calculate(&schedule).cpu_utilization, 100);
    }

    #[test]
    fn test_large_times_do_not_overflow_averages() {
        let big = i64::MAX / 4;
        let mut schedule = Schedule::new();
        schedule.complete(&Process::new("A", big), 0, big);
        schedule.complete(&Process::new("B", big), big, 2 * big);
        schedule.complete(&Process::new("C", big), 2 * big, 3 * big);

        let summary = Summary::calculate(&schedule);
        let expected = 2.0 * big as f64;
        assert!((summary.avg_turnaround_time - expected).abs() / expected < 1e-9);
        assert_eq!(summary.cpu_utilization, 100);
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::calculate(&Schedule::new());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.count, 0);
        assert!(approx(summary.avg_wait_time, 0.0));
        assert!(approx(summary.avg_turnaround_time, 0.0));
        assert_eq!(summary.cpu_utilization, 0);
    }

    #[test]
    fn test_degenerate_span_is_zero_percent() {
        // Completion at the arrival instant: span of zero.
        let mut schedule = Schedule::new();
        schedule.complete(&Process::new("A", 3).with_arrival(7), 7, 7);

        let summary = Summary::calculate(&schedule);
        assert_eq!(summary.cpu_utilization, 0);
        assert!(summary.avg_wait_time.is_finite());
    }
}
