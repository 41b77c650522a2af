//! CPU schedulers and KPI evaluation.
//!
//! Four single-CPU policies over a fixed process set, each a pure function
//! of its input slice:
//!
//! - [`Fcfs`]: serves processes in the given order.
//! - [`Sjf`]: static shortest-job-first, run to completion.
//! - [`PrioritySjf`]: tick-driven shortest-job-first over a ready queue,
//!   ties broken by priority, run to completion.
//! - [`RoundRobin`]: preemptive FIFO with a fixed quantum.
//!
//! Every scheduler owns its [`ProcessRun`](crate::models::ProcessRun) state
//! and leaves the caller's processes untouched, so all four may run over
//! the same input in any order.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{CpuScheduler, Fcfs};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let outcome = Fcfs.run(&processes);
//! assert_eq!(outcome.schedule.makespan(), 8);
//! assert_eq!(outcome.kpi.avg_wait, Some(2.0));
//! ```

mod fcfs;
mod kpi;
mod priority_sjf;
mod request;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use priority_sjf::PrioritySjf;
pub use request::SimulationRequest;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{Process, Schedule, TimeSlice};

/// Scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First-come, first-serve.
    Fcfs,
    /// Non-preemptive shortest-job-first.
    Sjf,
    /// Shortest-job-first with priority tie-break.
    PrioritySjf,
    /// Round-robin.
    RoundRobin,
}

impl Policy {
    /// All policies, in report order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::PrioritySjf,
        Policy::RoundRobin,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::PrioritySjf => "priority-sjf",
            Policy::RoundRobin => "rr",
        }
    }

    /// Report heading.
    pub fn title(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-come, first-serve",
            Policy::Sjf => "Shortest-job-first",
            Policy::PrioritySjf => "Shortest-job-first with Priority",
            Policy::RoundRobin => "Round-robin",
        }
    }

    /// Builds the scheduler for this policy.
    ///
    /// `quantum` only affects [`Policy::RoundRobin`].
    pub fn scheduler(self, quantum: i64) -> Box<dyn CpuScheduler> {
        match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf::new()),
            Policy::PrioritySjf => Box::new(PrioritySjf::new()),
            Policy::RoundRobin => Box::new(RoundRobin::new().with_quantum(quantum)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling policy '{0}' (expected fcfs, sjf, priority-sjf or rr)")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority-sjf" | "psjf" | "priority" => Ok(Policy::PrioritySjf),
            "rr" | "round-robin" => Ok(Policy::RoundRobin),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// The result of running one policy over one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingOutcome {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Gantt sequence and metrics rows.
    pub schedule: Schedule,
    /// Aggregate indicators.
    pub kpi: ScheduleKpi,
}

/// A single-CPU scheduling policy.
///
/// Implementations must be deterministic and must not retain state between
/// calls: `schedule` is a pure function of `processes`.
pub trait CpuScheduler: Send + Sync + fmt::Debug {
    /// Policy implemented by this scheduler.
    fn policy(&self) -> Policy;

    /// Simulates the process set and returns the resulting schedule.
    fn schedule(&self, processes: &[Process]) -> Schedule;

    /// Simulates the process set and computes its KPIs.
    fn run(&self, processes: &[Process]) -> SchedulingOutcome {
        let policy = self.policy();
        let _span = tracing::debug_span!("schedule", %policy).entered();
        debug!(processes = processes.len(), "simulation started");

        let schedule = self.schedule(processes);
        let kpi = ScheduleKpi::calculate(&schedule);

        debug!(
            slices = schedule.slice_count(),
            completed = kpi.completed,
            makespan = kpi.makespan,
            "simulation finished"
        );
        SchedulingOutcome {
            policy,
            schedule,
            kpi,
        }
    }
}

/// Appends a slice to the Gantt sequence.
fn emit(schedule: &mut Schedule, pid: i64, start: i64, stop: i64) {
    trace!(pid, start, stop, "slice");
    schedule.add_slice(TimeSlice::new(pid, start, stop));
}
