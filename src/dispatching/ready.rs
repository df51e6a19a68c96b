//! Index-tracked ready queue keyed by a dispatching rule.

use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// How ties are broken between processes with equal rule keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier arrival first, then earlier input position (default).
    ///
    /// Matches a first-found scan over an arrival-sorted list.
    #[default]
    ArrivalThenPosition,
    /// Earlier input position only.
    ///
    /// Matches a first-found scan over the list in input order.
    Position,
}

type Rank = Reverse<(RuleKey, i64, usize)>;

/// Ready processes, ordered by rule key and tie-breaker.
///
/// Items are indices into the process slice the queue was built from.
/// Each index may be present at most once; re-pushing updates its rank.
#[derive(Debug, Clone)]
pub struct ReadyQueue<'a, R: DispatchingRule> {
    processes: &'a [Process],
    rule: R,
    tie_breaker: TieBreaker,
    queue: PriorityQueue<usize, Rank>,
}

impl<'a, R: DispatchingRule> ReadyQueue<'a, R> {
    /// Creates an empty ready queue.
    pub fn new(processes: &'a [Process], rule: R, tie_breaker: TieBreaker) -> Self {
        Self {
            processes,
            rule,
            tie_breaker,
            queue: PriorityQueue::new(),
        }
    }

    fn rank(&self, idx: usize, remaining: i64) -> Rank {
        let process = &self.processes[idx];
        let key = self.rule.key(process, remaining);
        match self.tie_breaker {
            TieBreaker::ArrivalThenPosition => Reverse((key, process.arrival_time, idx)),
            TieBreaker::Position => Reverse((key, 0, idx)),
        }
    }

    /// Inserts (or re-ranks) a process with the given remaining time.
    pub fn push(&mut self, idx: usize, remaining: i64) {
        let rank = self.rank(idx, remaining);
        self.queue.push(idx, rank);
    }

    /// Re-ranks a queued process after its remaining time changed.
    pub fn update(&mut self, idx: usize, remaining: i64) {
        let rank = self.rank(idx, remaining);
        self.queue.change_priority(&idx, rank);
    }

    /// Index of the process that would be dispatched next.
    pub fn peek(&self) -> Option<usize> {
        self.queue.peek().map(|(&idx, _)| idx)
    }

    /// Removes and returns the next process to dispatch.
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop().map(|(idx, _)| idx)
    }

    /// The dispatching rule in use.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of ready processes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no process is ready.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
