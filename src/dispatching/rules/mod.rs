//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In, First Out.
///
/// Orders by arrival time. Used to admit processes to a ready queue in
/// the order they become eligible.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with a shorter total burst. Minimizes mean wait
/// on a single CPU when every job is available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Process priority.
///
/// Lower `priority` values run first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let early = Process::new(1, 0, 9);
        let late = Process::new(2, 4, 1);
        assert!(Fifo.evaluate(&early) < Fifo.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = Process::new(1, 5, 2);
        let long = Process::new(2, 0, 8);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_priority_lower_value_first() {
        let high = Process::new(1, 0, 1).with_priority(0);
        let low = Process::new(2, 0, 1).with_priority(5);
        assert!(Priority.evaluate(&high) < Priority.evaluate(&low));
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
