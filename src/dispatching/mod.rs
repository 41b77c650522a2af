//! Dispatching rules and rule engine for ordering processes.
//!
//! Schedulers that reorder their input (SJF, priority-SJF, round-robin
//! admission) do so through a [`RuleEngine`]: rules are applied in
//! sequence, later rules only break ties left by earlier ones, and
//! processes that tie on every rule keep their input order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::Priority);
//!
//! let mut queue = vec![
//!     Process::new(1, 0, 5).with_priority(2),
//!     Process::new(2, 0, 5).with_priority(1),
//!     Process::new(3, 0, 3),
//! ];
//! engine.sort(&mut queue);
//! let order: Vec<i64> = queue.iter().map(|p| p.id).collect();
//! assert_eq!(order, vec![3, 2, 1]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Scores are integers so that equal
/// keys compare exactly and ties fall through to the next rule.
pub type RuleScore = i64;

/// A dispatching rule that scores a process.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a process. Lower = dispatched earlier.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
