//! Policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{fcfs, priority, round_robin, sjf, srtf, RoundRobinMode, DEFAULT_QUANTUM};
use crate::error::{Error, Result};
use crate::models::{Process, Schedule};

/// A scheduling policy.
///
/// The set is closed: selectors that name no variant are rejected rather
/// than falling back to FCFS. Deserialization rejects a non-positive
/// round-robin quantum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case", try_from = "PolicyRepr")]
pub enum Policy {
    /// First-come-first-served.
    #[default]
    Fcfs,
    /// Non-preemptive shortest-job-first.
    Sjf,
    /// Non-preemptive priority (lower value = higher priority).
    Priority,
    /// Round-robin with a fixed quantum.
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: i64,
        /// Arrival handling.
        #[serde(default)]
        mode: RoundRobinMode,
    },
    /// Preemptive shortest-job-first (shortest remaining time first).
    PreemptiveSjf,
}

/// Unchecked wire form of [`Policy`].
#[derive(Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
enum PolicyRepr {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin {
        quantum: i64,
        #[serde(default)]
        mode: RoundRobinMode,
    },
    PreemptiveSjf,
}

impl TryFrom<PolicyRepr> for Policy {
    type Error = Error;

    fn try_from(repr: PolicyRepr) -> Result<Self> {
        match repr {
            PolicyRepr::Fcfs => Ok(Self::Fcfs),
            PolicyRepr::Sjf => Ok(Self::Sjf),
            PolicyRepr::Priority => Ok(Self::Priority),
            PolicyRepr::RoundRobin { quantum, mode } => Self::round_robin_with_mode(quantum, mode),
            PolicyRepr::PreemptiveSjf => Ok(Self::PreemptiveSjf),
        }
    }
}

impl Policy {
    /// Round-robin with the given quantum and the default arrival mode.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] if `quantum` is not positive.
    pub fn round_robin(quantum: i64) -> Result<Self> {
        Self::round_robin_with_mode(quantum, RoundRobinMode::default())
    }

    /// Round-robin with an explicit arrival mode.
    pub fn round_robin_with_mode(quantum: i64, mode: RoundRobinMode) -> Result<Self> {
        if quantum <= 0 {
            return Err(Error::InvalidQuantum(quantum));
        }
        Ok(Self::RoundRobin { quantum, mode })
    }

    /// Parses a selector, using `quantum` (or [`DEFAULT_QUANTUM`]) for round-robin.
    ///
    /// Accepted selectors (case-insensitive): `fcfs`, `sjf`, `priority`,
    /// `rr` / `round-robin`, `ps` / `srtf` / `preemptive-sjf`.
    pub fn from_selector(selector: &str, quantum: Option<i64>) -> Result<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" => Ok(Self::Priority),
            "rr" | "round-robin" => Self::round_robin(quantum.unwrap_or(DEFAULT_QUANTUM)),
            "ps" | "srtf" | "preemptive-sjf" => Ok(Self::PreemptiveSjf),
            _ => Err(Error::UnknownPolicy(selector.to_string())),
        }
    }

    /// Checks policy parameters.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] for a round-robin quantum that is not positive.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::RoundRobin { quantum, .. } if quantum <= 0 => {
                Err(Error::InvalidQuantum(quantum))
            }
            _ => Ok(()),
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
            Self::PreemptiveSjf => "Preemptive SJF",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. } | Self::PreemptiveSjf)
    }

    /// Runs this policy over `processes`.
    ///
    /// Input is assumed valid; see [`crate::validation`] and [`Policy::validate`].
    /// [`Simulator`](super::Simulator) checks both before scheduling.
    pub fn schedule(&self, processes: &[Process]) -> Schedule {
        match *self {
            Self::Fcfs => fcfs(processes),
            Self::Sjf => sjf(processes),
            Self::Priority => priority(processes),
            Self::RoundRobin { quantum, mode } => round_robin(processes, quantum, mode),
            Self::PreemptiveSjf => srtf(processes),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_selector(s, None)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum, .. } => write!(f, "{} (q={})", self.name(), quantum),
            _ => f.write_str(self.name()),
        }
    }
}
