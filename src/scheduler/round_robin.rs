//! Round-robin scheduler.
//!
//! # Algorithm
//!
//! Pending processes are ordered by arrival (stable). Each iteration:
//!
//! 1. Admit every pending process with `arrival <= clock` to the tail of
//!    the ready queue.
//! 2. With an empty queue the CPU idles until the next arrival.
//! 3. Otherwise the queue head runs for `min(quantum, remaining)` ticks.
//!    If work is left it goes back to the tail; if not it completes.
//!
//! Admission always precedes dispatch, so a process preempted in one
//! iteration is queued ahead of processes that arrived during its slice.
//!
//! # Complexity
//! O(n log n + Σ⌈burst / quantum⌉).

use std::collections::VecDeque;

use super::{emit, CpuScheduler, Policy};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessRun, Schedule};

/// Default time quantum (ticks).
pub const DEFAULT_QUANTUM: i64 = 4;

/// Preemptive round-robin scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobin};
///
/// let rr = RoundRobin::new().with_quantum(2);
/// let schedule = rr.schedule(&[Process::new(1, 0, 3), Process::new(2, 0, 2)]);
/// let order: Vec<i64> = schedule.slices.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![1, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
    admission: RuleEngine,
}

impl RoundRobin {
    /// Creates a scheduler with [`DEFAULT_QUANTUM`].
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            admission: RuleEngine::new().with_rule(rules::Fifo),
        }
    }

    /// Sets the time quantum. Values below 1 are clamped to 1.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum.max(1);
        self
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut pending: Vec<ProcessRun> = processes.iter().copied().map(ProcessRun::new).collect();
        self.admission.sort(&mut pending);
        let mut pending = VecDeque::from(pending);

        let mut queue: VecDeque<ProcessRun> = VecDeque::new();
        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;

        while !pending.is_empty() || !queue.is_empty() {
            while let Some(next) = pending.front() {
                if !next.process.has_arrived(clock) {
                    break;
                }
                queue.extend(pending.pop_front());
            }

            let Some(mut current) = queue.pop_front() else {
                // Idle until the next arrival.
                if let Some(next) = pending.front() {
                    clock = clock.max(next.process.arrival);
                }
                continue;
            };

            let start = clock;
            clock += current.consume(self.quantum);
            emit(&mut schedule, current.process.id, start, clock);

            if current.remaining_burst > 0 {
                queue.push_back(current);
            } else {
                current.complete(clock);
                schedule.add_run(&current);
            }
        }

        schedule
    }
}
