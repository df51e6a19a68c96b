//! Simulation dispatcher.
//!
//! # Algorithm
//!
//! 1. Validate the process list.
//! 2. Run the selected policy over it.
//! 3. Summarize the resulting schedule.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Policy, Summary};
use crate::error::Result;
use crate::models::{Process, Schedule};
use crate::validation::ensure_valid;

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Per-process results and CPU timeline.
    pub schedule: Schedule,
    /// Aggregate statistics.
    pub summary: Summary,
}

/// Runs simulations with a fixed policy.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Policy, Simulator};
///
/// let processes = vec![
///     Process::new("A", 5),
///     Process::new("B", 5),
/// ];
/// let simulator = Simulator::new(Policy::round_robin(4).unwrap());
/// let report = simulator.run(&processes).unwrap();
///
/// assert_eq!(report.schedule.process("A").unwrap().wait_time, 4);
/// assert_eq!(report.schedule.process("B").unwrap().wait_time, 5);
/// assert_eq!(report.summary.cpu_utilization, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Validates `processes`, schedules them and summarizes the result.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`](crate::Error::InvalidQuantum) if the policy
    /// is misconfigured, [`Error::InvalidInput`](crate::Error::InvalidInput)
    /// if any process fails validation. Nothing is scheduled in either case.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationReport> {
        self.policy.validate()?;
        ensure_valid(processes)?;

        let schedule = self.policy.schedule(processes);
        let summary = Summary::calculate(&schedule);
        info!(
            policy = %self.policy,
            count = summary.count,
            avg_wait = summary.avg_wait_time,
            avg_turnaround = summary.avg_turnaround_time,
            utilization = summary.cpu_utilization,
            "simulation complete"
        );

        Ok(SimulationReport {
            policy: self.policy,
            schedule,
            summary,
        })
    }
}

/// Runs one simulation with `policy`.
pub fn simulate(processes: &[Process], policy: Policy) -> Result<SimulationReport> {
    Simulator::new(policy).run(processes)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::scheduler::RoundRobinMode;
    use crate::validation::ValidationErrorKind;
    use crate::Error;
    use test_log::test;

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Priority,
            Policy::round_robin(4).unwrap(),
            Policy::round_robin(1).unwrap(),
            Policy::round_robin_with_mode(3, RoundRobinMode::ArrivalOrdered).unwrap(),
            Policy::PreemptiveSjf,
        ]
    }

    fn workload() -> Vec<Process> {
        vec![
            Process::new("P1", 7).with_arrival(3).with_priority(2),
            Process::new("P2", 4).with_priority(3),
            Process::new("P3", 1).with_arrival(4).with_priority(1),
            Process::new("P4", 4).with_arrival(5).with_priority(4),
            Process::new("P5", 2).with_arrival(30).with_priority(0),
            Process::new("P6", 3).with_arrival(3).with_priority(2),
        ]
    }

    fn id_counts<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::new();
        for id in ids {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_every_policy_conserves_processes_and_work() {
        let processes = workload();
        let input_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        let input_ids = id_counts(processes.iter().map(|p| p.id.as_str()));

        for policy in all_policies() {
            let report = simulate(&processes, policy).unwrap();
            let schedule = &report.schedule;

            assert_eq!(
                id_counts(schedule.processes.iter().map(|p| p.id())),
                input_ids,
                "{policy}"
            );
            let output_burst: i64 = schedule.processes.iter().map(|p| p.process.burst_time).sum();
            assert_eq!(output_burst, input_burst, "{policy}");
            assert_eq!(schedule.busy_time(), input_burst, "{policy}");

            for p in &schedule.processes {
                assert_eq!(p.turnaround_time, p.wait_time + p.process.burst_time, "{policy}");
                assert!(p.wait_time >= 0, "{policy}: {}", p.id());
                assert!(p.start_time >= p.process.arrival_time, "{policy}: {}", p.id());
                let ran: i64 = schedule.slices_for(p.id()).iter().map(|s| s.duration()).sum();
                assert_eq!(ran, p.process.burst_time, "{policy}: {}", p.id());
            }

            // The CPU never runs two processes at once.
            assert!(
                schedule.timeline.windows(2).all(|w| w[0].end <= w[1].start),
                "{policy}"
            );
            assert_eq!(report.summary.count, processes.len());
        }
    }

    #[test]
    fn test_fcfs_start_times_follow_arrival() {
        let report = simulate(&workload(), Policy::Fcfs).unwrap();
        let arrivals: Vec<i64> = report
            .schedule
            .processes
            .iter()
            .map(|p| p.process.arrival_time)
            .collect();
        let starts: Vec<i64> = report.schedule.processes.iter().map(|p| p.start_time).collect();
        assert!(arrivals.windows(2).all(|w| w[0] <= w[1]));
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![Process::new("A", 3), Process::new("A", 0)];
        let err = simulate(&processes, Policy::PreemptiveSjf).unwrap_err();

        let kinds: Vec<ValidationErrorKind> =
            err.validation_errors().iter().map(|e| e.kind).collect();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(kinds.contains(&ValidationErrorKind::DuplicateId));
        assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_zero_quantum_returns_error() {
        let policy = Policy::RoundRobin {
            quantum: 0,
            mode: RoundRobinMode::ArrivalOrdered,
        };
        let err = simulate(&[Process::new("A", 3)], policy).unwrap_err();
        assert!(matches!(err, Error::InvalidQuantum(0)));
    }

    #[test]
    fn test_clock_overflow_rejected_before_scheduling() {
        let huge = i64::MAX / 2 + 1;
        let processes = vec![Process::new("A", huge), Process::new("B", huge)];

        for policy in all_policies() {
            let err = simulate(&processes, policy).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::HorizonOverflow,
                "{policy}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        for policy in all_policies() {
            let report = simulate(&[], policy).unwrap();
            assert!(report.schedule.is_empty());
            assert_eq!(report.summary, Summary::default());
        }
    }

    #[test]
    fn test_report_serializes() {
        let report = Simulator::default()
            .with_policy(Policy::Sjf)
            .run(&[Process::new("A", 2)])
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["policy"]["policy"], "sjf");
        assert_eq!(value["schedule"]["processes"][0]["turnaroundTime"], 2);
        assert_eq!(value["summary"]["cpuUtilization"], 100);
    }
}
