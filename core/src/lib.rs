pub mod buffer;
pub mod config;
pub mod matrix;
pub mod sequence;

// Case registration, timing helpers and complexity fitting shared by the
// criterion benches and the CLI sweep runner
pub mod perf;

#[cfg(test)]
mod buffer_test;
