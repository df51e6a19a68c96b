//! Arrival cursor: releases processes in arrival order as the clock advances.

use crate::models::{arrival_order, Process};

/// Processes that have not yet been released to a ready queue.
///
/// Release order is `(arrival_time, input position)`.
#[derive(Debug, Clone)]
pub struct Arrivals<'a> {
    processes: &'a [Process],
    order: Vec<usize>,
    next: usize,
}

impl<'a> Arrivals<'a> {
    /// Creates a cursor over all processes.
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            order: arrival_order(processes),
            next: 0,
        }
    }

    /// Releases the next process that has arrived by `time`, if any.
    pub fn pop_arrived(&mut self, time: i64) -> Option<usize> {
        let idx = *self.order.get(self.next)?;
        if self.processes[idx].has_arrived(time) {
            self.next += 1;
            Some(idx)
        } else {
            None
        }
    }

    /// Arrival time of the next unreleased process.
    pub fn next_time(&self) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&idx| self.processes[idx].arrival_time)
    }

    /// Whether every process has been released.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.order.len()
    }
}
