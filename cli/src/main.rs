use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use locality_core::{
    buffer::RandomBuffer,
    config::{BenchConfig, Profile},
    perf::plan::{MatrixPlan, SequencePlan},
};
use tracing::info;

mod sweep;

const DEFAULT_TRACE_FILTER: &str = "locality_core=info,locality=info";

#[derive(Debug, Parser)]
#[command(
    name = "locality",
    author,
    version,
    about = "Matrix traversal and sequence container microbenchmarks",
    long_about = None,
    after_help = "For statistically sound numbers run `cargo bench -p locality-core`."
)]
struct CliArgs {
    /// TOML file with sizes, matrix bounds and seed
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Built-in size preset, ignored when --config is given
    #[arg(long, global = true, value_enum)]
    profile: Option<ProfileArg>,

    /// Fixed RNG seed for the input buffer
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// tracing filter, e.g. `locality_core=debug` (falls back to RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered cases and problem sizes.
    Plan,
    /// Time every (strategy, operation) pair over the configured sides.
    Matrix(SweepArgs),
    /// Time every (workload, container, element) case over the configured sizes.
    Sequence(SweepArgs),
}

#[derive(Debug, Args)]
struct SweepArgs {
    /// Timed iterations per (case, size), after one warm-up run
    #[arg(long, short = 'n', default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,

    /// Only run cases whose key contains this substring
    #[arg(long, short)]
    filter: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter_expr = filter.map(str::to_string).or_else(|| std::env::var("RUST_LOG").ok());
    let env_filter = match filter_expr {
        Some(expr) => EnvFilter::try_new(&expr).unwrap_or_else(|err| {
            eprintln!("invalid log filter '{}': {}; using '{}'", expr, err, DEFAULT_TRACE_FILTER);
            EnvFilter::new(DEFAULT_TRACE_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_TRACE_FILTER),
    };
    let _ = fmt().with_writer(std::io::stderr).with_env_filter(env_filter).try_init();
}

fn resolve_config(args: &CliArgs) -> anyhow::Result<BenchConfig> {
    let mut config = match (&args.config, args.profile) {
        (Some(path), _) => BenchConfig::load(path)?,
        (None, Some(profile)) => BenchConfig::profile(profile.into()),
        (None, None) => BenchConfig::quick(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn print_plan(out: &mut impl Write, config: &BenchConfig) -> anyhow::Result<()> {
    let matrix = MatrixPlan::new(&config.matrix)?;
    let sequence = SequencePlan::new(&config.sequence)?;
    writeln!(out, "matrix sides: {:?} (buffer {} cells)", matrix.sides, matrix.required_len())?;
    for case in &matrix.cases {
        writeln!(out, "  matrix/{}", case.key())?;
    }
    writeln!(out, "sequence sizes: {:?}", sequence.sizes)?;
    for case in &sequence.cases {
        writeln!(out, "  sequence/{}", case.key())?;
    }
    Ok(())
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Commands::Plan => print_plan(&mut out, &config)?,
        Commands::Matrix(sweep_args) => {
            let plan = MatrixPlan::new(&config.matrix)?.filtered(sweep_args.filter.as_deref());
            info!(cases = plan.cases.len(), iterations = sweep_args.iterations, "running matrix sweep");
            let reports = sweep::run_matrix(&plan, config.seed, sweep_args.iterations)?;
            sweep::print_reports(&mut out, &reports, "side")?;
        }
        Commands::Sequence(sweep_args) => {
            let plan = SequencePlan::new(&config.sequence)?.filtered(sweep_args.filter.as_deref());
            let buffer = RandomBuffer::generate(plan.required_len(), config.seed);
            plan.check_buffer(buffer.len())?;
            info!(cases = plan.cases.len(), iterations = sweep_args.iterations, "running sequence sweep");
            let reports = sweep::run_sequence(&plan, &buffer, sweep_args.iterations)?;
            sweep::print_reports(&mut out, &reports, "size")?;
        }
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log.as_deref());
    run(args)
}
