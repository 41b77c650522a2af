//! Shortest-job-first with priority tie-break, simulated tick by tick.
//!
//! # Algorithm
//!
//! A discrete-time state machine with a ready queue and a single running
//! slot. On every tick:
//!
//! 1. Processes arriving at the current tick join the ready queue in
//!    input order.
//! 2. A running process with no time left completes.
//! 3. An idle CPU picks the queue head after a stable sort by
//!    `(burst, priority)`.
//! 4. The running process, if any, consumes one tick.
//! 5. The clock advances.
//!
//! An idle CPU with an empty queue skips straight to the next arrival
//! instead of stepping through the empty ticks.
//!
//! Once selected a process runs to completion: a shorter job arriving
//! later does not preempt it.
//!
//! # Complexity
//! O(B · q log q) where B is the total burst and q the queue length.

use super::{emit, CpuScheduler, Policy};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessRun, Schedule};

/// Tick-driven shortest-job-first scheduler with priority tie-break.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, PrioritySjf};
///
/// let processes = vec![
///     Process::new(1, 0, 4),
///     Process::new(2, 1, 2).with_priority(1),
///     Process::new(3, 1, 2).with_priority(0),
/// ];
/// let schedule = PrioritySjf::new().schedule(&processes);
/// let order: Vec<i64> = schedule.slices.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PrioritySjf {
    engine: RuleEngine,
}

impl PrioritySjf {
    /// Creates a scheduler ordering by burst, then priority.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::Priority),
        }
    }
}

impl Default for PrioritySjf {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for PrioritySjf {
    fn policy(&self) -> Policy {
        Policy::PrioritySjf
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut sim = Simulation::new(&self.engine, processes);
        while !sim.is_finished() {
            sim.step();
        }
        sim.into_schedule()
    }
}

/// Process holding the CPU.
#[derive(Debug, Clone, Copy)]
struct Running {
    /// Index into `Simulation::runs`.
    index: usize,
    remaining: i64,
}

/// Simulation state for one scheduler call.
struct Simulation<'a> {
    engine: &'a RuleEngine,
    /// Run records in input order.
    runs: Vec<ProcessRun>,
    /// Indices into `runs`, by arrival (stable).
    arrivals: Vec<usize>,
    next_arrival: usize,
    /// Ready queue of indices into `runs`.
    queue: Vec<usize>,
    running: Option<Running>,
    current_time: i64,
    completed: usize,
    schedule: Schedule,
}

impl<'a> Simulation<'a> {
    fn new(engine: &'a RuleEngine, processes: &[Process]) -> Self {
        let runs: Vec<ProcessRun> = processes.iter().copied().map(ProcessRun::new).collect();
        let arrivals = RuleEngine::new().with_rule(rules::Fifo).sort_indices(&runs);

        Self {
            engine,
            runs,
            arrivals,
            next_arrival: 0,
            queue: Vec::new(),
            running: None,
            current_time: 0,
            completed: 0,
            schedule: Schedule::new(),
        }
    }

    fn is_finished(&self) -> bool {
        self.completed == self.runs.len()
    }

    /// Advances the simulation by one tick.
    fn step(&mut self) {
        self.admit_arrivals();
        self.complete_running();
        if self.running.is_none() {
            if self.queue.is_empty() {
                self.skip_idle();
            }
            self.dispatch();
        }

        if let Some(running) = self.running.as_mut() {
            running.remaining -= 1;
            self.runs[running.index].consume(1);
        }

        self.current_time += 1;
    }

    fn admit_arrivals(&mut self) {
        while let Some(&index) = self.arrivals.get(self.next_arrival) {
            if !self.runs[index].process.has_arrived(self.current_time) {
                break;
            }
            self.queue.push(index);
            self.next_arrival += 1;
        }
    }

    /// Jumps the clock to the next arrival and admits it.
    fn skip_idle(&mut self) {
        let Some(&index) = self.arrivals.get(self.next_arrival) else {
            return;
        };
        self.current_time = self.current_time.max(self.runs[index].process.arrival);
        self.admit_arrivals();
    }

    fn complete_running(&mut self) {
        let Some(running) = self.running else {
            return;
        };
        if running.remaining > 0 {
            return;
        }

        let run = &mut self.runs[running.index];
        run.complete(self.current_time);
        let pid = run.process.id;
        let start = self.current_time - run.process.burst;

        emit(&mut self.schedule, pid, start, self.current_time);
        self.running = None;
        self.completed += 1;
    }

    fn dispatch(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let (engine, runs) = (self.engine, &self.runs);
        self.queue
            .sort_by(|&a, &b| engine.compare(&runs[a].process, &runs[b].process));

        let index = self.queue.remove(0);
        self.running = Some(Running {
            index,
            remaining: self.runs[index].process.burst,
        });
    }

    /// Metrics rows follow input order.
    fn into_schedule(mut self) -> Schedule {
        for run in &self.runs {
            self.schedule.add_run(run);
        }
        self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;
    use pretty_assertions::assert_eq;

    fn order(schedule: &Schedule) -> Vec<i64> {
        schedule.slices.iter().map(|s| s.pid).collect()
    }

    #[test]
    fn test_scenario_runs_without_gaps() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let outcome = PrioritySjf::new().run(&processes);

        assert_eq!(
            outcome.schedule.slices,
            vec![
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 8),
                TimeSlice::new(3, 8, 16),
            ]
        );
        let waits: Vec<i64> = outcome.schedule.stats.iter().map(|s| s.wait).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((outcome.kpi.throughput.unwrap() - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_preemption_by_shorter_arrival() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4).with_priority(2),
            Process::new(3, 2, 4).with_priority(1),
            Process::new(4, 3, 2),
        ];
        let schedule = PrioritySjf::new().schedule(&processes);

        assert_eq!(
            schedule.slices,
            vec![
                TimeSlice::new(1, 0, 8),
                TimeSlice::new(4, 8, 10),
                TimeSlice::new(3, 10, 14),
                TimeSlice::new(2, 14, 18),
            ]
        );
    }

    #[test]
    fn test_dynamic_queue_differs_from_static_sjf() {
        // Static SJF would idle until t=10 for the short job; the ready
        // queue only holds what has arrived, so the long job starts at 0.
        let processes = vec![Process::new(1, 0, 6), Process::new(2, 10, 1)];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(
            schedule.slices,
            vec![TimeSlice::new(1, 0, 6), TimeSlice::new(2, 10, 11)]
        );
    }

    #[test]
    fn test_idle_cpu_between_arrivals() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 1)];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(
            schedule.slices,
            vec![TimeSlice::new(1, 0, 2), TimeSlice::new(2, 5, 6)]
        );
        assert_eq!(schedule.stats[1].wait, 0);
    }

    #[test]
    fn test_far_arrival_skips_idle_ticks() {
        let far = 1_000_000_000_000;
        let processes = vec![Process::new(1, 0, 1), Process::new(2, far, 1)];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(
            schedule.slices,
            vec![TimeSlice::new(1, 0, 1), TimeSlice::new(2, far, far + 1)]
        );
        assert_eq!(schedule.stats_for_process(2).unwrap().wait, 0);
    }

    #[test]
    fn test_full_tie_keeps_arrival_order() {
        let processes = vec![
            Process::new(8, 0, 1),
            Process::new(9, 0, 3),
            Process::new(7, 0, 3),
        ];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(order(&schedule), vec![8, 9, 7]);
    }

    #[test]
    fn test_stats_in_input_order() {
        let processes = vec![
            Process::new(1, 0, 9),
            Process::new(2, 0, 1),
            Process::new(3, 0, 4),
        ];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(order(&schedule), vec![2, 3, 1]);
        let rows: Vec<i64> = schedule.stats.iter().map(|s| s.id).collect();
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(schedule.stats_for_process(1).unwrap().exit, 14);
    }

    #[test]
    fn test_unsorted_arrivals() {
        let processes = vec![Process::new(1, 3, 2), Process::new(2, 0, 2)];
        let schedule = PrioritySjf::new().schedule(&processes);
        assert_eq!(
            schedule.slices,
            vec![TimeSlice::new(2, 0, 2), TimeSlice::new(1, 3, 5)]
        );
    }

    #[test]
    fn test_empty() {
        let outcome = PrioritySjf::new().run(&[]);
        assert!(outcome.schedule.is_empty());
        assert_eq!(outcome.kpi.avg_turnaround, None);
    }
}
