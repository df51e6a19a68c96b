//! Built-in dispatching rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// First Come First Served.
///
/// Ranks by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &Process, _remaining: i64) -> RuleKey {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Ranks by total burst time. Long jobs can starve while shorter ones keep
/// arriving.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process, _remaining: i64) -> RuleKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling.
///
/// Ranks by priority value; lower value = higher priority.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process, _remaining: i64) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by remaining CPU time. When two processes have equal remaining
/// time, the one listed earlier in the input wins (use with
/// [`TieBreaker::Position`](super::TieBreaker::Position)), so a running
/// process is only displaced by a strictly shorter job or by an equal one
/// listed before it.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, _process: &Process, remaining: i64) -> RuleKey {
        remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
