//! First-come, first-serve scheduler.
//!
//! # Algorithm
//!
//! Processes are served in the order given, each run to completion:
//!
//! 1. `wait = max(0, service_time - arrival)`
//! 2. `start = arrival + wait`
//! 3. `service_time = start + burst`, which is also the exit time.
//!
//! Wait is recomputed for every process, including ones arriving at t=0
//! after the CPU has already moved on.
//!
//! # Complexity
//! O(n).

use super::{emit, CpuScheduler, Policy};
use crate::models::{Process, ProcessRun, Schedule};

/// First-come, first-serve scheduler.
///
/// Never reorders its input: the caller decides what "first" means
/// (conventionally ascending arrival).
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, TimeSlice};
/// use u_cpusched::scheduler::{CpuScheduler, Fcfs};
///
/// let schedule = Fcfs.schedule(&[Process::new(1, 0, 5), Process::new(2, 1, 3)]);
/// assert_eq!(schedule.slices[1], TimeSlice::new(2, 5, 8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut service_time: i64 = 0;

        for &process in processes {
            let mut run = ProcessRun::new(process);
            let wait = (service_time - process.arrival).max(0);
            let start = process.arrival + wait;

            service_time = start + run.consume(process.burst);
            run.complete(service_time);

            emit(&mut schedule, process.id, start, service_time);
            schedule.add_run(&run);
        }

        schedule
    }
}
