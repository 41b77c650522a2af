//! Single-CPU scheduling simulator.
//!
//! Replays a fixed set of processes through classic scheduling policies
//! and reports, for each policy, the Gantt timeline and per-process wait,
//! turnaround and exit times along with their averages and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRun`, `Schedule`,
//!   `TimeSlice`, `ProcessStats`, `Violation`
//! - **`dispatching`**: Rule-based ordering (`Fifo`, `ShortestBurst`,
//!   `Priority`) combined by a `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, priority-SJF and round-robin schedulers,
//!   `ScheduleKpi`, multi-policy `SimulationRequest`
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, arrivals)
//! - **`loader`**: CSV and JSON process lists
//! - **`render`**: Plain-text Gantt and metrics reports
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{Policy, SimulationRequest};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let outcomes = SimulationRequest::new(processes).run();
//! let sjf = outcomes.iter().find(|o| o.policy == Policy::Sjf).unwrap();
//! assert_eq!(sjf.schedule.slices[0].pid, 2);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne, "Operating System Concepts", ch. 5
//! - Tanenbaum, Bos, "Modern Operating Systems", §2.4

pub mod dispatching;
pub mod loader;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;
