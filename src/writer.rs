//! Serializes a finished partition to the textual report format, and
//! optionally a machine-readable JSON summary for downstream tooling.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::hypergraph::{Hypergraph, Side};
use crate::partition::session::SessionReport;

/// Writes the `Cutsize = ... / G1 ... / G2 ...` report described in the
/// external interface. The reference writer leaves a trailing space before
/// each `;`; we match it so byte-for-byte comparisons against reference
/// output succeed.
pub fn write_report(path: &Path, hg: &Hypergraph, report: &SessionReport) -> Result<()> {
    let mut out = std::fs::File::create(path)
        .with_context(|| format!("creating output file {:?}", path))?;

    writeln!(out, "Cutsize = {}", report.final_cutsize)?;

    write_side(&mut out, hg, &report.assignment, Side::A, "G1")?;
    write_side(&mut out, hg, &report.assignment, Side::B, "G2")?;

    Ok(())
}

fn write_side(
    out: &mut impl Write,
    hg: &Hypergraph,
    assignment: &[Side],
    side: Side,
    label: &str,
) -> Result<()> {
    let cells: Vec<&str> = (0..hg.cell_count())
        .filter(|&c| assignment[c] == side)
        .map(|c| hg.cell_name(c))
        .collect();

    writeln!(out, "{} {}", label, cells.len())?;
    for name in &cells {
        write!(out, "{} ", name)?;
    }
    writeln!(out, ";")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonStats {
    initial_cutsize: usize,
    final_cutsize: usize,
    part_size_a: u32,
    part_size_b: u32,
    pass_count: u32,
    elapsed_ms: u128,
}

/// Writes the optional `--json-stats` summary.
pub fn write_json_stats(path: &Path, report: &SessionReport) -> Result<()> {
    let stats = JsonStats {
        initial_cutsize: report.initial_cutsize,
        final_cutsize: report.final_cutsize,
        part_size_a: report.part_size[Side::A.idx()],
        part_size_b: report.part_size[Side::B.idx()],
        pass_count: report.pass_count,
        elapsed_ms: report.elapsed.as_millis(),
    };

    let out = std::fs::File::create(path)
        .with_context(|| format!("creating JSON stats file {:?}", path))?;
    serde_json::ser::to_writer_pretty(out, &stats).context("serializing JSON stats")?;
    Ok(())
}
