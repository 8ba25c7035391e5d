//! Sweep configuration: problem sizes, matrix bounds and the optional RNG
//! seed. Loaded from TOML; every field has a default.
//!
//! ```toml
//! seed = 7
//!
//! [matrix]
//! sides = [32, 512, 1024]
//! max_side = 1024
//! write_value = 0
//!
//! [sequence]
//! sizes = [32, 512, 1024]
//! ```

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Path of a TOML config used by the benches when set.
pub const CONFIG_ENV: &str = "LOCALITY_CONFIG";
/// `quick` or `full`; ignored when [`CONFIG_ENV`] is set.
pub const PROFILE_ENV: &str = "LOCALITY_PROFILE";

/// Complete side sweep. The largest buffer is around 26 GB of `i32`.
pub const MATRIX_FULL_SIDES: &[usize] = &[
    32, 512, 1024, 2048, 4096, 6144, 8192, 10240, 12288, 14336, 16384, 18432, 20480, 22528, 24576, 26624, 28672,
    30720, 32768, 34816, 36864, 40960, 45056, 49152, 53248, 57344, 61440, 65536, 69632, 73728, 77824, 81920,
];

pub const SEQUENCE_FULL_SIZES: &[usize] = &[
    32, 512, 1024, 2048, 4096, 6144, 8192, 16384, 32768, 65536, 131072, 262144,
];

const MATRIX_QUICK_SIDES: &[usize] = &[32, 512, 1024, 2048];
const SEQUENCE_QUICK_SIZES: &[usize] = &[32, 512, 1024, 2048, 4096];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Quick,
    Full,
}

impl std::str::FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(Profile::Quick),
            "full" => Ok(Profile::Full),
            other => bail!("unknown profile '{}', expected 'quick' or 'full'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Fixed RNG seed; `None` draws from OS entropy so runs differ.
    pub seed: Option<u64>,
    pub matrix: MatrixConfig,
    pub sequence: SequenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub sides: Vec<usize>,
    /// Side of the backing buffer; every entry of `sides` must fit.
    pub max_side: usize,
    /// Initial accumulator: the value stored by `write` and XOR-ed in by
    /// `write_dependent`.
    pub write_value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub sizes: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::quick()
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::with_sides(MATRIX_QUICK_SIDES)
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            sizes: SEQUENCE_QUICK_SIZES.to_vec(),
        }
    }
}

impl MatrixConfig {
    /// Sides as given, with `max_side` set to the largest of them.
    pub fn with_sides(sides: &[usize]) -> Self {
        Self {
            sides: sides.to_vec(),
            max_side: sides.iter().copied().max().unwrap_or(0),
            write_value: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.sides.is_empty(), "matrix.sides must not be empty");
        for &side in &self.sides {
            ensure!(side > 0, "matrix.sides contains 0");
            ensure!(
                side <= self.max_side,
                "matrix side {} exceeds matrix.max_side {}",
                side,
                self.max_side
            );
        }
        ensure!(
            self.max_side.checked_mul(self.max_side).is_some(),
            "matrix.max_side {} is too large",
            self.max_side
        );
        Ok(())
    }
}

impl SequenceConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.sizes.is_empty(), "sequence.sizes must not be empty");
        ensure!(self.sizes.iter().all(|&n| n > 0), "sequence.sizes contains 0");
        Ok(())
    }
}

impl BenchConfig {
    pub fn quick() -> Self {
        Self {
            seed: None,
            matrix: MatrixConfig::default(),
            sequence: SequenceConfig::default(),
        }
    }

    pub fn full() -> Self {
        Self {
            seed: None,
            matrix: MatrixConfig::with_sides(MATRIX_FULL_SIDES),
            sequence: SequenceConfig {
                sizes: SEQUENCE_FULL_SIZES.to_vec(),
            },
        }
    }

    pub fn profile(profile: Profile) -> Self {
        match profile {
            Profile::Quick => Self::quick(),
            Profile::Full => Self::full(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("parse benchmark config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml_str(&source).with_context(|| format!("load config {}", path.display()))?;
        debug!(path = %path.display(), "loaded benchmark config");
        Ok(config)
    }

    /// Config for bench targets, which cannot take CLI flags of their own.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load(path);
        }
        match env::var(PROFILE_ENV) {
            Ok(profile) => Ok(Self::profile(profile.parse()?)),
            Err(_) => Ok(Self::quick()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.matrix.validate()?;
        self.sequence.validate()
    }
}
