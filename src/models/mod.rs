//! CPU scheduling domain models.
//!
//! Provides the input record ([`Process`]), the per-run working state
//! ([`ProcessRun`]) and the solution types ([`Schedule`], [`TimeSlice`],
//! [`ProcessStats`]).
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | Process | once, by the loader | never |
//! | ProcessRun | at the start of a scheduler call | during simulation |
//! | Schedule | by the scheduler | append-only while simulating |

mod process;
mod run;
mod schedule;

pub use process::Process;
pub use run::{ProcessRun, ProcessStats};
pub use schedule::{Schedule, TimeSlice, Violation, ViolationType};
