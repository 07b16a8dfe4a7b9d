//! Simulator: validated configuration plus a fresh engine per run.
//!
//! Runs never share state. Each call to [`Simulator::run`] clears the trace's
//! timestamps and builds a new [`TomasuloEngine`], so the same trace can be
//! simulated repeatedly with identical results.

use serde::Serialize;

use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::pipeline::engine::TomasuloEngine;
use crate::core::units::bru::BranchPredictorWrapper;
use crate::isa::instruction::OpClass;
use crate::isa::trace::InstructionTrace;
use crate::stats::SimStats;

/// Result of one simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimReport {
    /// Cycle count returned by the engine.
    pub cycles: u64,
    /// Counters collected during the run.
    pub stats: SimStats,
}

impl SimReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Arguments
    ///
    /// * `timing` - Per-instruction rows to include, or `None` to emit `null`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Report`] if serialization fails.
    pub fn to_json(&self, timing: Option<&[TimingRow]>) -> SimResult<String> {
        #[derive(Serialize)]
        struct Output<'a> {
            cycles: u64,
            stats: &'a SimStats,
            timing: Option<&'a [TimingRow]>,
        }

        let out = Output {
            cycles: self.cycles,
            stats: &self.stats,
            timing,
        };
        serde_json::to_string_pretty(&out).map_err(SimError::Report)
    }
}

/// Per-instruction timestamps, flattened for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimingRow {
    /// Program-order index.
    pub index: u64,
    /// Program counter.
    pub pc: u64,
    /// Operation class.
    pub op: OpClass,
    /// Dispatch cycle.
    pub dispatch: Option<u64>,
    /// Issue cycle.
    pub issue: Option<u64>,
    /// Execute start cycle.
    pub execute: Option<u64>,
    /// CDB broadcast cycle.
    pub cdb: Option<u64>,
}

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`](crate::common::error::SimError::InvalidConfig)
    /// if the configuration is structurally invalid.
    pub fn new(config: Config) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Simulates `trace` on a fresh engine.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimitExceeded`](crate::common::error::SimError::CycleLimitExceeded)
    /// if the configured cycle limit is hit.
    pub fn run(&self, trace: &mut InstructionTrace) -> SimResult<SimReport> {
        trace.reset_timing();
        let mut engine = TomasuloEngine::new(&self.config);
        let cycles = engine.run(trace)?;
        Ok(SimReport {
            cycles,
            stats: engine.stats,
        })
    }

    /// Builds the branch predictor selected by the configuration.
    pub fn predictor(&self) -> BranchPredictorWrapper {
        BranchPredictorWrapper::new(&self.config.predictor)
    }
}

/// Flattens the timestamps of every record in `trace`.
pub fn timing_report(trace: &InstructionTrace) -> Vec<TimingRow> {
    trace
        .iter()
        .map(|inst| TimingRow {
            index: inst.index,
            pc: inst.pc,
            op: inst.op,
            dispatch: inst.timing.dispatch,
            issue: inst.timing.issue,
            execute: inst.timing.execute,
            cdb: inst.timing.cdb,
        })
        .collect()
}
