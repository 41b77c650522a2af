//! Plain-text reports.
//!
//! Each [`SchedulingOutcome`] is rendered as a title banner, a Gantt bar
//! and a metrics table:
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0       5       8       16
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------------+
//! | ID | Priority | Burst | Arrival |    Wait | Turnaround |       Exit |
//! ...
//! ```
//!
//! The table itself is laid out by `comfy-table`.

use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};

use crate::models::TimeSlice;
use crate::scheduler::SchedulingOutcome;

const HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

const GANTT_CELL: usize = 8;

/// Writes every outcome, one report after another.
pub fn write_reports<W: Write>(w: &mut W, outcomes: &[SchedulingOutcome]) -> io::Result<()> {
    for outcome in outcomes {
        write_report(w, outcome)?;
    }
    Ok(())
}

/// Writes the full report for one outcome.
pub fn write_report<W: Write>(w: &mut W, outcome: &SchedulingOutcome) -> io::Result<()> {
    write_title(w, outcome.policy.title())?;
    write_gantt(w, &outcome.schedule.slices)?;
    write_table(w, outcome)
}

/// Writes a banner: dashes, the indented title, dashes.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt bar and the time axis below it.
pub fn write_gantt<W: Write>(w: &mut W, slices: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for slice in slices {
        let pid = slice.pid.to_string();
        let pad = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{pad}{pid}{pad}|")?;
    }
    writeln!(w)?;

    for (i, slice) in slices.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == slices.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the metrics table with its averages footer.
pub fn write_table<W: Write>(w: &mut W, outcome: &SchedulingOutcome) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED).set_header(HEADER);
    for s in &outcome.schedule.stats {
        table.add_row([s.id, s.priority, s.burst, s.arrival, s.wait, s.turnaround, s.exit]);
    }

    let kpi = &outcome.kpi;
    let throughput = match kpi.throughput {
        Some(t) => format!("{t:.2}/t"),
        None => format_avg(None),
    };
    table.add_row([
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average\n{}", format_avg(kpi.avg_wait)),
        format!("Average\n{}", format_avg(kpi.avg_turnaround)),
        format!("Throughput\n{throughput}"),
    ]);
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(w, "{table}")?;
    writeln!(w)
}

/// Formats an aggregate to two decimals, `n/a` when undefined.
pub fn format_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}
