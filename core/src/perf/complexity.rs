//! Asymptotic fit of measured time against problem size.
//!
//! For each candidate curve `f` the coefficient minimizing the squared error
//! is `sum(t * f(n)) / sum(f(n)^2)`; the curve with the lowest root mean
//! square error wins. The reported RMS is normalized by the mean time.

use std::fmt;

use anyhow::{Result, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigO {
    O1,
    OLogN,
    ON,
    ONLogN,
    ON2,
    ON3,
}

impl BigO {
    /// Candidates in the order they are tried; on equal error the earlier
    /// (simpler) curve is kept.
    pub const CANDIDATES: [BigO; 6] = [BigO::O1, BigO::OLogN, BigO::ON, BigO::ONLogN, BigO::ON2, BigO::ON3];

    pub fn eval(self, n: f64) -> f64 {
        match self {
            BigO::O1 => 1.0,
            BigO::OLogN => n.log2(),
            BigO::ON => n,
            BigO::ONLogN => n * n.log2(),
            BigO::ON2 => n * n,
            BigO::ON3 => n * n * n,
        }
    }
}

impl fmt::Display for BigO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BigO::O1 => "(1)",
            BigO::OLogN => "lgN",
            BigO::ON => "N",
            BigO::ONLogN => "NlgN",
            BigO::ON2 => "N^2",
            BigO::ON3 => "N^3",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityFit {
    pub big_o: BigO,
    pub coefficient: f64,
    pub rms: f64,
}

impl fmt::Display for ComplexityFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} {} (rms {:.1}%)", self.coefficient, self.big_o, self.rms * 100.0)
    }
}

/// Fits `(n, time)` samples against one curve.
pub fn fit_curve(samples: &[(f64, f64)], big_o: BigO) -> ComplexityFit {
    let (num, den) = samples.iter().fold((0.0, 0.0), |(num, den), &(n, t)| {
        let g = big_o.eval(n);
        (num + t * g, den + g * g)
    });
    let coefficient = if den > 0.0 { num / den } else { 0.0 };
    let count = samples.len() as f64;
    let sq_err: f64 = samples
        .iter()
        .map(|&(n, t)| {
            let diff = t - coefficient * big_o.eval(n);
            diff * diff
        })
        .sum();
    let mean = samples.iter().map(|&(_, t)| t).sum::<f64>() / count;
    let rms = (sq_err / count).sqrt();
    ComplexityFit {
        big_o,
        coefficient,
        rms: if mean > 0.0 { rms / mean } else { rms },
    }
}

/// Picks the best fitting curve. Needs at least two distinct sizes.
pub fn fit(samples: &[(f64, f64)]) -> Result<ComplexityFit> {
    ensure!(samples.len() >= 2, "complexity fit needs at least two samples, got {}", samples.len());
    let first = samples[0].0;
    ensure!(
        samples.iter().any(|&(n, _)| n != first),
        "complexity fit needs at least two distinct problem sizes"
    );
    let mut best = fit_curve(samples, BigO::CANDIDATES[0]);
    for big_o in &BigO::CANDIDATES[1..] {
        let candidate = fit_curve(samples, *big_o);
        if candidate.rms < best.rms {
            best = candidate;
        }
    }
    Ok(best)
}
