//! Reproducible random workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dispatching::{rules, RuleEngine};
use crate::models::Process;

/// Random process-set generator.
///
/// The same seed and settings always produce the same processes. IDs run
/// from 1 to `count`, and the result is ordered by arrival (stable), so it
/// can be fed to any scheduler directly.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5).with_seed(3).generate();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.windows(2).all(|w| w[0].arrival <= w[1].arrival));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    seed: u64,
    max_arrival: i64,
    burst: (i64, i64),
    priority: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: seed 0, arrivals in `0..=20`, bursts in `1..=10`,
    /// priorities in `0..=3`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            max_arrival: 20,
            burst: (1, 10),
            priority: (0, 3),
        }
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the latest possible arrival time. Negative values mean 0.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range. Bursts are at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority = (min, max.max(min));
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut processes: Vec<Process> = (1..=self.count as i64)
            .map(|id| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.burst.0..=self.burst.1);
                let priority = rng.random_range(self.priority.0..=self.priority.1);
                Process::new(id, arrival, burst).with_priority(priority)
            })
            .collect();

        RuleEngine::new().with_rule(rules::Fifo).sort(&mut processes);
        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_same_seed_same_workload() {
        let a = WorkloadGenerator::new(30).with_seed(11).generate();
        let b = WorkloadGenerator::new(30).with_seed(11).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_and_ranges() {
        let processes = WorkloadGenerator::new(50)
            .with_seed(5)
            .with_max_arrival(7)
            .with_burst_range(2, 4)
            .with_priority_range(1, 1)
            .generate();

        let mut ids: Vec<i64> = processes.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());

        for p in &processes {
            assert!((0..=7).contains(&p.arrival));
            assert!((2..=4).contains(&p.burst));
            assert_eq!(p.priority, 1);
        }
    }

    #[test]
    fn test_sorted_by_arrival_and_valid() {
        let processes = WorkloadGenerator::new(40).with_seed(9).generate();
        assert!(processes.windows(2).all(|w| w[0].arrival <= w[1].arrival));
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_ranges_are_clamped() {
        let processes = WorkloadGenerator::new(20)
            .with_max_arrival(-5)
            .with_burst_range(0, -3)
            .generate();
        assert!(processes.iter().all(|p| p.arrival == 0 && p.burst == 1));
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(0).generate().is_empty());
    }
}
