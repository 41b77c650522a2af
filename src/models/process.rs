//! Process model.
//!
//! A process is the unit of work handed to a CPU scheduler: it becomes
//! eligible at its arrival time and needs `burst` units of CPU time to
//! finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable input record. Schedulers never modify it; per-run state lives
/// in [`ProcessRun`](super::ProcessRun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Time at which the process becomes eligible to run (ticks, ≥ 0).
    pub arrival: i64,
    /// Total CPU time required (ticks, > 0).
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by time `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival <= now
    }
}

impl AsRef<Process> for Process {
    fn as_ref(&self) -> &Process {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 3, 10).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 10);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new(1, 0, 5).priority, 0);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 4, 2);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(9));
    }

    #[test]
    fn test_deserialize_without_priority() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":2,"burst":3}"#).unwrap();
        assert_eq!(p, Process::new(1, 2, 3));
    }
}
