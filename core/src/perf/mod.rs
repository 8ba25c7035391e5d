//! Shared benchmarking scaffolding used by the criterion benches and the CLI
//! sweep runner.
//!
//! Registering cases in one place keeps both tools measuring the same
//! (strategy, operation) and (workload, container, element) combinations.

pub mod complexity;
pub mod harness;
pub mod plan;

#[cfg(test)]
mod complexity_test;
