//! Multi-policy simulation request.

use serde::{Deserialize, Serialize};

use super::{Policy, SchedulingOutcome, DEFAULT_QUANTUM};
use crate::models::Process;

/// Input container for comparing policies over one process set.
///
/// Each policy runs independently over the same processes; no state is
/// shared between runs.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Policy, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![Process::new(1, 0, 5), Process::new(2, 1, 3)])
///     .with_policies(vec![Policy::Fcfs, Policy::RoundRobin])
///     .with_quantum(2);
///
/// let outcomes = request.run();
/// assert_eq!(outcomes.len(), 2);
/// assert_eq!(outcomes[1].policy, Policy::RoundRobin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in caller order.
    pub processes: Vec<Process>,
    /// Policies to run, in report order.
    pub policies: Vec<Policy>,
    /// Round-robin time quantum.
    pub quantum: i64,
}

impl SimulationRequest {
    /// Creates a request running every policy with the default quantum.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            policies: Policy::ALL.to_vec(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Runs every requested policy, returning one outcome per policy.
    pub fn run(&self) -> Vec<SchedulingOutcome> {
        self.policies
            .iter()
            .map(|policy| policy.scheduler(self.quantum).run(&self.processes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_default_request_runs_all_policies() {
        let outcomes = SimulationRequest::new(sample_processes()).run();
        let policies: Vec<Policy> = outcomes.iter().map(|o| o.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_quantum_reaches_round_robin() {
        let outcomes = SimulationRequest::new(sample_processes())
            .with_policies(vec![Policy::RoundRobin])
            .with_quantum(1)
            .run();
        assert!(outcomes[0]
            .schedule
            .slices
            .iter()
            .all(|s| s.duration() == 1));
    }

    #[test]
    fn test_policies_do_not_interfere() {
        let processes = sample_processes();
        let combined = SimulationRequest::new(processes.clone()).run();
        for outcome in combined {
            let alone = outcome
                .policy
                .scheduler(DEFAULT_QUANTUM)
                .run(&processes);
            assert_eq!(outcome, alone);
        }
    }

    #[test]
    fn test_empty_request() {
        let outcomes = SimulationRequest::new(Vec::new()).run();
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.kpi.throughput.is_none()));
    }
}
