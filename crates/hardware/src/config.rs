//! Configuration system for the Tomasulo simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! pipeline and the branch predictors. It provides:
//! 1. **Defaults:** Baseline resource counts, latencies and predictor table sizes.
//! 2. **Structures:** Hierarchical config for general, pipeline, and predictor settings.
//! 3. **Loading:** JSON parsing from strings or files, followed by structural validation.
//!
//! Every field is optional in JSON; omitted fields take the values below, so
//! `{}` is a valid configuration equal to `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Fetch queue capacity bound. Fetch stops once the queue holds more than this.
    pub const FETCH_QUEUE_CAPACITY: usize = 16;

    /// Integer reservation stations.
    pub const INT_RS_SIZE: usize = 4;

    /// Floating-point reservation stations.
    pub const FP_RS_SIZE: usize = 2;

    /// Integer functional units.
    pub const INT_FU_COUNT: usize = 2;

    /// Floating-point functional units.
    pub const FP_FU_COUNT: usize = 1;

    /// Integer (and load/store) execution latency in cycles.
    pub const INT_LATENCY: u64 = 4;

    /// Floating-point execution latency in cycles.
    pub const FP_LATENCY: u64 = 9;

    /// Two-bit predictor counter table size.
    pub const TWO_BIT_ENTRIES: usize = 4096;

    /// Two-level predictor per-address history table size.
    pub const TWO_LEVEL_HISTORY_ENTRIES: usize = 512;

    /// Two-level predictor history register width in bits.
    pub const TWO_LEVEL_HISTORY_BITS: usize = 6;

    /// Two-level predictor low PC bits selecting a pattern table column.
    pub const TWO_LEVEL_PC_BITS: usize = 3;

    /// Perceptron table rows.
    pub const PERCEPTRON_TABLE_SIZE: usize = 512;

    /// Perceptron global history length (bias weight included).
    pub const PERCEPTRON_HISTORY: usize = 32;

    /// Perceptron training threshold and weight saturation bound.
    pub const PERCEPTRON_THRESHOLD: i32 = 63;
}

/// Branch predictor algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BranchPredictorKind {
    /// Per-address table of 2-bit saturating counters.
    #[default]
    #[serde(alias = "two-bit", alias = "TwoBit")]
    TwoBit,
    /// Two-level adaptive predictor with per-address history and pattern tables.
    #[serde(alias = "two-level", alias = "TwoLevel")]
    TwoLevel,
    /// Perceptron predictor over global history.
    #[serde(alias = "perceptron", alias = "Perceptron")]
    Perceptron,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Run-level settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Pipeline resources and latencies
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Branch predictor settings
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] on malformed JSON and
    /// [`SimError::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a buildable machine.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> SimResult<()> {
        self.pipeline.validate()?;
        self.predictor.validate()
    }
}

/// Run-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Abort the run if the pipeline has not drained after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Tomasulo pipeline resources.
///
/// Counts of reservation stations and functional units per class, the
/// fetch queue bound, and fixed execution latencies.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Fetch queue capacity bound
    #[serde(default = "PipelineConfig::default_fetch_queue_capacity")]
    pub fetch_queue_capacity: usize,

    /// Integer reservation stations
    #[serde(default = "PipelineConfig::default_int_rs_size")]
    pub int_rs_size: usize,

    /// Floating-point reservation stations
    #[serde(default = "PipelineConfig::default_fp_rs_size")]
    pub fp_rs_size: usize,

    /// Integer functional units
    #[serde(default = "PipelineConfig::default_int_fu_count")]
    pub int_fu_count: usize,

    /// Floating-point functional units
    #[serde(default = "PipelineConfig::default_fp_fu_count")]
    pub fp_fu_count: usize,

    /// Integer execution latency in cycles
    #[serde(default = "PipelineConfig::default_int_latency")]
    pub int_latency: u64,

    /// Floating-point execution latency in cycles
    #[serde(default = "PipelineConfig::default_fp_latency")]
    pub fp_latency: u64,
}

impl PipelineConfig {
    /// Returns the default fetch queue capacity bound.
    fn default_fetch_queue_capacity() -> usize {
        defaults::FETCH_QUEUE_CAPACITY
    }

    /// Returns the default number of integer reservation stations.
    fn default_int_rs_size() -> usize {
        defaults::INT_RS_SIZE
    }

    /// Returns the default number of floating-point reservation stations.
    fn default_fp_rs_size() -> usize {
        defaults::FP_RS_SIZE
    }

    /// Returns the default number of integer functional units.
    fn default_int_fu_count() -> usize {
        defaults::INT_FU_COUNT
    }

    /// Returns the default number of floating-point functional units.
    fn default_fp_fu_count() -> usize {
        defaults::FP_FU_COUNT
    }

    /// Returns the default integer latency.
    fn default_int_latency() -> u64 {
        defaults::INT_LATENCY
    }

    /// Returns the default floating-point latency.
    fn default_fp_latency() -> u64 {
        defaults::FP_LATENCY
    }

    fn validate(&self) -> SimResult<()> {
        let counts = [
            ("pipeline.fetch_queue_capacity", self.fetch_queue_capacity),
            ("pipeline.int_rs_size", self.int_rs_size),
            ("pipeline.fp_rs_size", self.fp_rs_size),
            ("pipeline.int_fu_count", self.int_fu_count),
            ("pipeline.fp_fu_count", self.fp_fu_count),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(SimError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if self.int_latency == 0 {
            return Err(SimError::InvalidConfig(
                "pipeline.int_latency must be at least 1".into(),
            ));
        }
        if self.fp_latency == 0 {
            return Err(SimError::InvalidConfig(
                "pipeline.fp_latency must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// Creates the default machine: 16-entry fetch queue, 4 integer and 2 FP
    /// reservation stations, 2 integer and 1 FP unit, latencies 4 and 9.
    fn default() -> Self {
        Self {
            fetch_queue_capacity: defaults::FETCH_QUEUE_CAPACITY,
            int_rs_size: defaults::INT_RS_SIZE,
            fp_rs_size: defaults::FP_RS_SIZE,
            int_fu_count: defaults::INT_FU_COUNT,
            fp_fu_count: defaults::FP_FU_COUNT,
            int_latency: defaults::INT_LATENCY,
            fp_latency: defaults::FP_LATENCY,
        }
    }
}

/// Branch predictor selection and per-algorithm parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictorConfig {
    /// Algorithm used by the predictor driver
    #[serde(default)]
    pub kind: BranchPredictorKind,

    /// Two-bit predictor configuration
    #[serde(default)]
    pub two_bit: TwoBitConfig,

    /// Two-level predictor configuration
    #[serde(default)]
    pub two_level: TwoLevelConfig,

    /// Perceptron predictor configuration
    #[serde(default)]
    pub perceptron: PerceptronConfig,
}

impl PredictorConfig {
    fn validate(&self) -> SimResult<()> {
        check_power_of_two("predictor.two_bit.entries", self.two_bit.entries)?;
        check_power_of_two(
            "predictor.two_level.history_entries",
            self.two_level.history_entries,
        )?;
        check_power_of_two("predictor.perceptron.table_size", self.perceptron.table_size)?;

        if !(1..=16).contains(&self.two_level.history_bits) {
            return Err(SimError::InvalidConfig(
                "predictor.two_level.history_bits must be in 1..=16".into(),
            ));
        }
        if self.two_level.pc_bits > 16 {
            return Err(SimError::InvalidConfig(
                "predictor.two_level.pc_bits must be at most 16".into(),
            ));
        }
        if self.two_level.history_bits + self.two_level.pc_bits > MAX_PATTERN_INDEX_BITS {
            return Err(SimError::InvalidConfig(format!(
                "predictor.two_level.history_bits + pc_bits must be at most {MAX_PATTERN_INDEX_BITS}"
            )));
        }
        if !(2..=64).contains(&self.perceptron.history_length) {
            return Err(SimError::InvalidConfig(
                "predictor.perceptron.history_length must be in 2..=64".into(),
            ));
        }
        if self.perceptron.threshold < 1 {
            return Err(SimError::InvalidConfig(
                "predictor.perceptron.threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Widest two-level pattern table index (2^20 counters).
const MAX_PATTERN_INDEX_BITS: usize = 20;

fn check_power_of_two(name: &str, value: usize) -> SimResult<()> {
    if value.is_power_of_two() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be a non-zero power of two, got {value}"
        )))
    }
}

/// Two-bit saturating counter predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TwoBitConfig {
    /// Counter table size
    #[serde(default = "TwoBitConfig::default_entries")]
    pub entries: usize,
}

impl TwoBitConfig {
    /// Returns the default counter table size.
    fn default_entries() -> usize {
        defaults::TWO_BIT_ENTRIES
    }
}

impl Default for TwoBitConfig {
    fn default() -> Self {
        Self {
            entries: defaults::TWO_BIT_ENTRIES,
        }
    }
}

/// Two-level adaptive (per-address history, per-address patterns) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TwoLevelConfig {
    /// Per-address history registers
    #[serde(default = "TwoLevelConfig::default_history_entries")]
    pub history_entries: usize,

    /// Bits of history used to index the pattern table
    #[serde(default = "TwoLevelConfig::default_history_bits")]
    pub history_bits: usize,

    /// Low PC bits selecting the pattern table column
    #[serde(default = "TwoLevelConfig::default_pc_bits")]
    pub pc_bits: usize,
}

impl TwoLevelConfig {
    /// Returns the default history table size.
    fn default_history_entries() -> usize {
        defaults::TWO_LEVEL_HISTORY_ENTRIES
    }

    /// Returns the default history width.
    fn default_history_bits() -> usize {
        defaults::TWO_LEVEL_HISTORY_BITS
    }

    /// Returns the default number of PC bits.
    fn default_pc_bits() -> usize {
        defaults::TWO_LEVEL_PC_BITS
    }
}

impl Default for TwoLevelConfig {
    fn default() -> Self {
        Self {
            history_entries: defaults::TWO_LEVEL_HISTORY_ENTRIES,
            history_bits: defaults::TWO_LEVEL_HISTORY_BITS,
            pc_bits: defaults::TWO_LEVEL_PC_BITS,
        }
    }
}

/// Perceptron branch predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PerceptronConfig {
    /// Perceptron table rows
    #[serde(default = "PerceptronConfig::default_table_size")]
    pub table_size: usize,

    /// Weights per row (bias plus `history_length - 1` history weights)
    #[serde(default = "PerceptronConfig::default_history")]
    pub history_length: usize,

    /// Training threshold and weight saturation bound
    #[serde(default = "PerceptronConfig::default_threshold")]
    pub threshold: i32,
}

impl PerceptronConfig {
    /// Returns the default Perceptron table size.
    fn default_table_size() -> usize {
        defaults::PERCEPTRON_TABLE_SIZE
    }

    /// Returns the default Perceptron history length.
    fn default_history() -> usize {
        defaults::PERCEPTRON_HISTORY
    }

    /// Returns the default Perceptron training threshold.
    fn default_threshold() -> i32 {
        defaults::PERCEPTRON_THRESHOLD
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            table_size: defaults::PERCEPTRON_TABLE_SIZE,
            history_length: defaults::PERCEPTRON_HISTORY,
            threshold: defaults::PERCEPTRON_THRESHOLD,
        }
    }
}
