//! `cpusched`: run a process list through the CPU scheduling policies.
//!
//! Reads processes from a CSV (`id,burst,arrival[,priority]`) or JSON file,
//! or generates a seeded random workload, then prints a Gantt chart and a
//! metrics table for every selected policy.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use u_cpusched::loader;
use u_cpusched::render;
use u_cpusched::scheduler::{Policy, SimulationRequest, DEFAULT_QUANTUM};
use u_cpusched::validation::validate_processes;
use u_cpusched::workload::WorkloadGenerator;

/// Report format
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
    /// Gantt bars and tables
    Text,
    /// Outcomes as a JSON array
    Json,
}

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "cpusched", version)]
#[command(about = "Simulate FCFS, SJF, priority-SJF and round-robin scheduling", long_about = None)]
struct Args {
    /// Process list: CSV `id,burst,arrival[,priority]`, or JSON with a .json extension
    #[arg(required_unless_present = "random")]
    input: Option<PathBuf>,

    /// Policy to run: fcfs, sjf, priority-sjf (psjf) or rr (round-robin).
    /// Repeatable; every policy runs when omitted
    #[arg(short, long = "policy", value_name = "POLICY", value_parser = Policy::from_str)]
    policies: Vec<Policy>,

    /// Round-robin time quantum
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM, value_parser = clap::value_parser!(i64).range(1..))]
    quantum: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Check every schedule's invariants; exit non-zero on violations
    #[arg(long, default_value_t = false)]
    audit: bool,

    /// Generate COUNT random processes instead of reading a file
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u64,
}

fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let processes = match (&args.input, args.random) {
        (_, Some(count)) => WorkloadGenerator::new(count).with_seed(args.seed).generate(),
        (Some(path), None) => loader::load_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        (None, None) => bail!("an input file or --random is required"),
    };

    if let Err(errors) = validate_processes(&processes) {
        for error in &errors {
            eprintln!("invalid input: {error}");
        }
        bail!("{} validation error(s)", errors.len());
    }

    let mut request = SimulationRequest::new(processes).with_quantum(args.quantum);
    if !args.policies.is_empty() {
        request = request.with_policies(args.policies);
    }
    info!(
        processes = request.processes.len(),
        policies = request.policies.len(),
        quantum = request.quantum,
        "running simulation"
    );
    let outcomes = request.run();

    let mut out = io::stdout().lock();
    let written = match args.format {
        OutputFormat::Text => render::write_reports(&mut out, &outcomes),
        OutputFormat::Json => serde_json::to_writer_pretty(&mut out, &outcomes)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out)),
    };
    written
        .and_then(|()| out.flush())
        .context("failed to write report")?;

    if args.audit {
        let mut total = 0;
        for outcome in &outcomes {
            let violations = outcome.schedule.audit(&request.processes);
            for v in &violations {
                warn!(
                    policy = %outcome.policy,
                    pid = v.pid,
                    kind = ?v.violation_type,
                    "{}",
                    v.message
                );
            }
            total += violations.len();
        }
        if total > 0 {
            bail!("audit found {total} violation(s)");
        }
        info!("audit passed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cpusched", "procs.csv"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("procs.csv")));
        assert!(args.policies.is_empty());
        assert_eq!(args.quantum, DEFAULT_QUANTUM);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.audit);
    }

    #[test]
    fn test_repeated_policy() {
        let args =
            Args::try_parse_from(["cpusched", "p.csv", "-p", "rr", "--policy", "priority-sjf"])
                .unwrap();
        assert_eq!(args.policies, vec![Policy::RoundRobin, Policy::PrioritySjf]);
    }

    #[test]
    fn test_policy_aliases() {
        let args = Args::try_parse_from([
            "cpusched", "p.csv", "-p", "psjf", "-p", "round-robin", "-p", "FIFO",
        ])
        .unwrap();
        assert_eq!(
            args.policies,
            vec![Policy::PrioritySjf, Policy::RoundRobin, Policy::Fcfs]
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Args::try_parse_from(["cpusched", "p.csv", "-p", "lottery"]).is_err());
    }

    #[test]
    fn test_input_required_without_random() {
        assert!(Args::try_parse_from(["cpusched"]).is_err());
        let args = Args::try_parse_from(["cpusched", "--random", "8", "--seed", "3"]).unwrap();
        assert_eq!(args.random, Some(8));
        assert_eq!(args.seed, 3);
    }

    #[test]
    fn test_quantum_must_be_positive() {
        assert!(Args::try_parse_from(["cpusched", "p.csv", "-q", "0"]).is_err());
    }
}
