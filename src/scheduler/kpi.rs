//! Schedule quality metrics (KPIs).
//!
//! Computes the standard CPU scheduling indicators from a completed
//! schedule's metrics rows.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest exit time |
//! | Avg Wait | Mean of `turnaround - burst` |
//! | Avg Turnaround | Mean of `exit - arrival` |
//! | Throughput | Completed processes / makespan |
//! | CPU Utilization | Busy ticks / makespan |
//!
//! Aggregates over an empty schedule are not applicable and are reported
//! as `None` instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes with a metrics row.
    pub completed: usize,
    /// Latest exit time (0 for an empty schedule).
    pub makespan: i64,
    /// Mean wait time.
    pub avg_wait: Option<f64>,
    /// Mean turnaround time.
    pub avg_turnaround: Option<f64>,
    /// Completed processes per tick.
    pub throughput: Option<f64>,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let completed = schedule.stats.len();
        let makespan = schedule.stats.iter().map(|s| s.exit).max().unwrap_or(0);

        let (avg_wait, avg_turnaround) = if completed == 0 {
            (None, None)
        } else {
            let total_wait: i64 = schedule.stats.iter().map(|s| s.wait).sum();
            let total_turnaround: i64 = schedule.stats.iter().map(|s| s.turnaround).sum();
            (
                Some(total_wait as f64 / completed as f64),
                Some(total_turnaround as f64 / completed as f64),
            )
        };

        let throughput = if completed == 0 || makespan <= 0 {
            None
        } else {
            Some(completed as f64 / makespan as f64)
        };

        Self {
            completed,
            makespan,
            avg_wait,
            avg_turnaround,
            throughput,
            cpu_utilization: schedule.cpu_utilization(makespan),
        }
    }
}
