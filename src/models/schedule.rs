//! Schedule (solution) model.
//!
//! A schedule is the Gantt sequence a scheduler produced for one input,
//! together with the per-process metrics rows it emitted. It can be
//! audited against the input to detect broken invariants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Process, ProcessRun, ProcessStats};

/// A complete single-CPU schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU occupancy intervals, in execution order.
    pub slices: Vec<TimeSlice>,
    /// Per-process metrics rows, in the scheduler's emission order.
    pub stats: Vec<ProcessStats>,
}

/// A CPU occupancy interval `[start, stop)` for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process occupying the CPU.
    pub pid: i64,
    /// First tick of the interval.
    pub start: i64,
    /// First tick after the interval.
    pub stop: i64,
}

/// A broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related process ID.
    pub pid: i64,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// An input process has no metrics row.
    MissingProcess,
    /// A process has more than one metrics row.
    DuplicateProcess,
    /// A row or slice names a process that is not in the input.
    UnknownProcess,
    /// A process's slices do not add up to its burst.
    WorkMismatch,
    /// Two slices occupy the CPU at the same time.
    Overlap,
    /// A slice starts before the slice emitted ahead of it.
    OutOfOrder,
    /// A slice with `stop <= start`.
    EmptySlice,
    /// A row reports a negative wait or an inconsistent turnaround.
    NegativeWait,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(pid: i64, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }

    /// Whether two slices share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &TimeSlice) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

impl Violation {
    fn new(violation_type: ViolationType, pid: i64, message: String) -> Self {
        Self {
            violation_type,
            pid,
            message,
        }
    }

    /// Creates a missing-process violation.
    pub fn missing_process(pid: i64) -> Self {
        Self::new(
            ViolationType::MissingProcess,
            pid,
            format!("Process {pid} has no metrics row"),
        )
    }

    /// Creates a duplicate-process violation.
    pub fn duplicate_process(pid: i64, rows: usize) -> Self {
        Self::new(
            ViolationType::DuplicateProcess,
            pid,
            format!("Process {pid} has {rows} metrics rows"),
        )
    }

    /// Creates an unknown-process violation.
    pub fn unknown_process(pid: i64) -> Self {
        Self::new(
            ViolationType::UnknownProcess,
            pid,
            format!("Process {pid} is not part of the input"),
        )
    }

    /// Creates a work-mismatch violation.
    pub fn work_mismatch(pid: i64, scheduled: i64, burst: i64) -> Self {
        Self::new(
            ViolationType::WorkMismatch,
            pid,
            format!("Process {pid} ran for {scheduled} ticks, burst is {burst}"),
        )
    }

    /// Creates an overlap violation.
    pub fn overlap(a: &TimeSlice, b: &TimeSlice) -> Self {
        Self::new(
            ViolationType::Overlap,
            b.pid,
            format!(
                "Process {} [{}, {}) overlaps process {} [{}, {})",
                b.pid, b.start, b.stop, a.pid, a.start, a.stop
            ),
        )
    }

    /// Creates an out-of-order violation.
    pub fn out_of_order(prev: &TimeSlice, slice: &TimeSlice) -> Self {
        Self::new(
            ViolationType::OutOfOrder,
            slice.pid,
            format!(
                "Slice for process {} starts at {} after a slice starting at {}",
                slice.pid, slice.start, prev.start
            ),
        )
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice to the Gantt sequence.
    pub fn add_slice(&mut self, slice: TimeSlice) {
        self.slices.push(slice);
    }

    /// Appends a metrics row.
    pub fn add_stats(&mut self, stats: ProcessStats) {
        self.stats.push(stats);
    }

    /// Appends the metrics row of a completed run.
    ///
    /// Runs that have not finished have no row and are skipped.
    pub fn add_run(&mut self, run: &ProcessRun) {
        self.stats.extend(run.stats());
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() && self.stats.is_empty()
    }

    /// Makespan: latest stop time across all slices.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Returns all slices for a given process.
    pub fn slices_for_process(&self, pid: i64) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Finds the metrics row for a given process.
    pub fn stats_for_process(&self, pid: i64) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.id == pid)
    }

    /// Completion time for a process (latest stop of its slices).
    pub fn completion_time(&self, pid: i64) -> Option<i64> {
        self.slices_for_process(pid).iter().map(|s| s.stop).max()
    }

    /// CPU utilization: busy_time / horizon.
    ///
    /// Returns `None` if `horizon` is zero.
    pub fn cpu_utilization(&self, horizon: i64) -> Option<f64> {
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Checks the schedule against the input it was produced from.
    ///
    /// Verifies coverage (one row per input process), work conservation,
    /// slice ordering, non-overlap on the single CPU, and consistency of
    /// each row's wait and turnaround. Returns every violation found; an
    /// empty vector means the schedule is sound.
    pub fn audit(&self, processes: &[Process]) -> Vec<Violation> {
        let mut violations = Vec::new();

        let bursts: HashMap<i64, i64> = processes.iter().map(|p| (p.id, p.burst)).collect();

        // Coverage
        let mut rows: HashMap<i64, usize> = HashMap::new();
        for row in &self.stats {
            *rows.entry(row.id).or_insert(0) += 1;
            if !bursts.contains_key(&row.id) {
                violations.push(Violation::unknown_process(row.id));
            }
            if row.wait < 0 || row.turnaround != row.wait + row.burst {
                violations.push(Violation::new(
                    ViolationType::NegativeWait,
                    row.id,
                    format!(
                        "Process {} reports wait {} and turnaround {} for burst {}",
                        row.id, row.wait, row.turnaround, row.burst
                    ),
                ));
            }
        }
        for p in processes {
            match rows.get(&p.id).copied().unwrap_or(0) {
                0 => violations.push(Violation::missing_process(p.id)),
                1 => {}
                n => violations.push(Violation::duplicate_process(p.id, n)),
            }
        }

        // Work conservation
        let mut scheduled: HashMap<i64, i64> = HashMap::new();
        for slice in &self.slices {
            if slice.stop <= slice.start {
                violations.push(Violation::new(
                    ViolationType::EmptySlice,
                    slice.pid,
                    format!(
                        "Slice for process {} is empty: [{}, {})",
                        slice.pid, slice.start, slice.stop
                    ),
                ));
            }
            if bursts.contains_key(&slice.pid) {
                *scheduled.entry(slice.pid).or_insert(0) += slice.duration();
            } else {
                violations.push(Violation::unknown_process(slice.pid));
            }
        }
        for p in processes {
            let ran = scheduled.get(&p.id).copied().unwrap_or(0);
            if ran != p.burst {
                violations.push(Violation::work_mismatch(p.id, ran, p.burst));
            }
        }

        // Ordering
        for pair in self.slices.windows(2) {
            if pair[1].start < pair[0].start {
                violations.push(Violation::out_of_order(&pair[0], &pair[1]));
            }
        }

        // Single CPU: no two slices may overlap
        let mut by_start: Vec<&TimeSlice> = self.slices.iter().collect();
        by_start.sort_by_key(|s| s.start);
        for pair in by_start.windows(2) {
            if pair[0].overlaps(pair[1]) {
                violations.push(Violation::overlap(pair[0], pair[1]));
            }
        }

        violations
    }
}
