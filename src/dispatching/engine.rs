//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! each following rule only breaks ties left by the rules before it.
//! Complete ties keep insertion order, since every sort here is stable.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::Priority);
/// assert_eq!(engine.rule_names(), vec!["SJF", "PRIORITY"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules every process ties,
    /// so sorting leaves input order untouched.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes rule by rule.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Stable in-place sort (highest priority first).
    ///
    /// Works on anything that exposes a [`Process`], so schedulers can sort
    /// their own run records directly.
    pub fn sort<T: AsRef<Process>>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Returns indices into `items`, sorted by rule evaluation.
    pub fn sort_indices<T: AsRef<Process>>(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| self.compare(items[a].as_ref(), items[b].as_ref()));
        indices
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessRun;

    fn ids<T: AsRef<Process>>(items: &[T]) -> Vec<i64> {
        items.iter().map(|p| p.as_ref().id).collect()
    }

    #[test]
    fn test_shortest_burst_ordering() {
        let mut procs = vec![
            Process::new(1, 0, 8),
            Process::new(2, 0, 2),
            Process::new(3, 0, 5),
        ];
        RuleEngine::new().with_rule(rules::ShortestBurst).sort(&mut procs);
        assert_eq!(ids(&procs), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut procs = vec![
            Process::new(9, 0, 4),
            Process::new(3, 0, 4),
            Process::new(5, 0, 4),
        ];
        RuleEngine::new().with_rule(rules::ShortestBurst).sort(&mut procs);
        assert_eq!(ids(&procs), vec![9, 3, 5]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let mut procs = vec![
            Process::new(1, 0, 4).with_priority(3),
            Process::new(2, 0, 4).with_priority(1),
            Process::new(3, 0, 2).with_priority(9),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::Priority);
        engine.sort(&mut procs);
        // burst decides first, priority only between the two 4-tick bursts
        assert_eq!(ids(&procs), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_runs() {
        let mut runs = vec![
            ProcessRun::new(Process::new(1, 5, 1)),
            ProcessRun::new(Process::new(2, 0, 1)),
        ];
        RuleEngine::new().with_rule(rules::Fifo).sort(&mut runs);
        assert_eq!(ids(&runs), vec![2, 1]);
    }

    #[test]
    fn test_sort_indices() {
        let procs = vec![Process::new(1, 0, 5), Process::new(2, 0, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.sort_indices(&procs), vec![1, 0]);
    }

    #[test]
    fn test_empty_engine_preserves_order() {
        let mut procs = vec![Process::new(2, 3, 9), Process::new(1, 0, 1)];
        RuleEngine::new().sort(&mut procs);
        assert_eq!(ids(&procs), vec![2, 1]);
    }
}
