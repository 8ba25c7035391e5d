//! In-process sweep runner: a fixed iteration count per (case, size), timed
//! with `Instant`. Good for smoke runs and complexity trends; criterion is
//! the tool for publishable numbers.

use std::hint::black_box;
use std::io::Write;

use anyhow::Result;
use locality_core::{
    buffer::RandomBuffer,
    matrix::MatrixBuffer,
    perf::{
        complexity::{self, ComplexityFit},
        harness::{Measurement, format_rate, measure},
        plan::{MatrixPlan, SequencePlan},
    },
};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct CaseReport {
    pub key: String,
    pub rows: Vec<(usize, Measurement)>,
    pub fit: Option<ComplexityFit>,
}

pub fn run_matrix(plan: &MatrixPlan, seed: Option<u64>, iterations: u64) -> Result<Vec<CaseReport>> {
    let mut matrix = MatrixBuffer::generate(plan.max_side, seed)?;
    let mut reports = Vec::with_capacity(plan.cases.len());
    for case in &plan.cases {
        let mut rows = Vec::with_capacity(plan.sides.len());
        for &side in &plan.sides {
            black_box(case.run(matrix.cells_mut(), side, plan.write_value));
            let measurement = measure(iterations, MatrixPlan::throughput(side, iterations), || {
                black_box(case.run(matrix.cells_mut(), side, plan.write_value));
            });
            debug!(case = %case.key(), side, elapsed = ?measurement.elapsed, "matrix sample");
            rows.push((side, measurement));
        }
        let fit = fit_rows(&case.key(), &rows);
        reports.push(CaseReport {
            key: format!("matrix/{}", case.key()),
            rows,
            fit,
        });
    }
    Ok(reports)
}

pub fn run_sequence(plan: &SequencePlan, buffer: &RandomBuffer, iterations: u64) -> Result<Vec<CaseReport>> {
    let mut reports = Vec::with_capacity(plan.cases.len());
    for case in &plan.cases {
        let mut rows = Vec::with_capacity(plan.sizes.len());
        for &size in &plan.sizes {
            let input = buffer.prefix(size)?;
            black_box(case.run(input));
            let measurement = measure(iterations, case.throughput(size, iterations), || {
                black_box(case.run(black_box(input)));
            });
            debug!(case = %case.key(), size, elapsed = ?measurement.elapsed, "sequence sample");
            rows.push((size, measurement));
        }
        reports.push(CaseReport {
            key: format!("sequence/{}", case.key()),
            rows,
            fit: None,
        });
    }
    Ok(reports)
}

fn fit_rows(key: &str, rows: &[(usize, Measurement)]) -> Option<ComplexityFit> {
    let samples: Vec<(f64, f64)> = rows
        .iter()
        .map(|(n, m)| (*n as f64, m.per_iteration().as_secs_f64() * 1e9))
        .collect();
    match complexity::fit(&samples) {
        Ok(fit) => Some(fit),
        Err(err) => {
            warn!(case = key, "skipping complexity fit: {}", err);
            None
        }
    }
}

pub fn print_reports(out: &mut impl Write, reports: &[CaseReport], size_label: &str) -> Result<()> {
    for report in reports {
        writeln!(out, "{}", report.key)?;
        writeln!(
            out,
            "  {:>8}  {:>14}  {:>14}  {:>14}",
            size_label, "time/iter", "items/s", "bytes/s"
        )?;
        for (size, m) in &report.rows {
            writeln!(
                out,
                "  {:>8}  {:>14}  {:>14}  {:>14}",
                size,
                format!("{:.3?}", m.per_iteration()),
                format_rate(m.items_per_sec(), ""),
                format_rate(m.bytes_per_sec(), "B"),
            )?;
        }
        if let Some(fit) = &report.fit {
            writeln!(out, "  complexity (ns): {}", fit)?;
        }
    }
    Ok(())
}
