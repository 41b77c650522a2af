//! Non-preemptive shortest-job-first scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort the whole input by ascending burst (ties keep input order).
//! 2. Walk that order once, idling the CPU up to each process's arrival
//!    when needed, and run each process to completion.
//!
//! The order is fixed up front across the entire input and is not
//! recomputed against the set of processes that have actually arrived.
//! A long job can therefore run before a shorter job that arrives later
//! but before the long job starts.
//!
//! # Complexity
//! O(n log n).

use super::{emit, CpuScheduler, Policy};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessRun, Schedule};

/// Static shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates a scheduler ordering by burst.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestBurst),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut runs: Vec<ProcessRun> = processes.iter().copied().map(ProcessRun::new).collect();
        self.engine.sort(&mut runs);

        let mut schedule = Schedule::new();
        let mut current_time: i64 = 0;

        for run in &mut runs {
            let process = run.process;
            // CPU idles until the next job in burst order shows up
            current_time = current_time.max(process.arrival);

            let start = current_time;
            current_time += run.consume(process.burst);
            run.complete(current_time);

            emit(&mut schedule, process.id, start, current_time);
            schedule.add_run(run);
        }

        schedule
    }
}
