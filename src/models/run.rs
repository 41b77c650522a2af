//! Per-run process state and the resulting metrics row.

use serde::{Deserialize, Serialize};

use super::Process;

/// Working copy of a [`Process`] owned by a single scheduler invocation.
///
/// Tracks the CPU time still owed to the process and, once it finishes,
/// the time its final slice ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRun {
    /// The input record this run was created from.
    pub process: Process,
    /// CPU time not yet granted (ticks).
    pub remaining_burst: i64,
    /// Completion time. `None` while the process is still runnable.
    pub exit: Option<i64>,
}

impl ProcessRun {
    /// Creates a fresh run owing the full burst.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining_burst: process.burst,
            exit: None,
        }
    }

    /// Grants up to `ticks` of CPU time; returns the amount actually used.
    pub fn consume(&mut self, ticks: i64) -> i64 {
        let used = ticks.min(self.remaining_burst);
        self.remaining_burst -= used;
        used
    }

    /// Records completion at `exit`.
    pub fn complete(&mut self, exit: i64) {
        self.remaining_burst = 0;
        self.exit = Some(exit);
    }

    /// Metrics row for a completed run.
    pub fn stats(&self) -> Option<ProcessStats> {
        let exit = self.exit?;
        let turnaround = exit - self.process.arrival;
        Some(ProcessStats {
            id: self.process.id,
            priority: self.process.priority,
            burst: self.process.burst,
            arrival: self.process.arrival,
            wait: turnaround - self.process.burst,
            turnaround,
            exit,
        })
    }
}

impl AsRef<Process> for ProcessRun {
    fn as_ref(&self) -> &Process {
        &self.process
    }
}

/// One row of a schedule's per-process metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: i64,
    /// Scheduling priority.
    pub priority: i64,
    /// Original burst.
    pub burst: i64,
    /// Arrival time.
    pub arrival: i64,
    /// Time spent ready but not running.
    pub wait: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Completion time.
    pub exit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_owes_full_burst() {
        let run = ProcessRun::new(Process::new(1, 2, 6));
        assert_eq!(run.remaining_burst, 6);
        assert_eq!(run.exit, None);
        assert_eq!(run.stats(), None);
    }

    #[test]
    fn test_consume_caps_at_remaining() {
        let mut run = ProcessRun::new(Process::new(1, 0, 6));
        assert_eq!(run.consume(4), 4);
        assert_eq!(run.remaining_burst, 2);
        assert_eq!(run.consume(4), 2);
        assert_eq!(run.remaining_burst, 0);
    }

    #[test]
    fn test_complete_derives_metrics() {
        let mut run = ProcessRun::new(Process::new(3, 2, 8).with_priority(1));
        run.complete(16);

        let stats = run.stats().unwrap();
        assert_eq!(stats.id, 3);
        assert_eq!(stats.priority, 1);
        assert_eq!(stats.wait, 6);
        assert_eq!(stats.turnaround, 14);
        assert_eq!(stats.exit, 16);
        assert_eq!(stats.turnaround, stats.wait + stats.burst);
    }

    #[test]
    fn test_run_does_not_touch_input() {
        let p = Process::new(1, 0, 5);
        let mut run = ProcessRun::new(p);
        run.consume(5);
        assert_eq!(p.burst, 5);
        assert_eq!(run.process.burst, 5);
    }
}
