use tomasim_core::config::{Config, PipelineConfig};
use tomasim_core::isa::{InstId, Instruction, InstructionTrace};
use tomasim_core::{Simulator, TomasuloEngine};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber once per test binary.
///
/// Output is captured by the test runner; set `RUST_LOG=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Owns a configuration and runs traces on fresh engines.
pub struct TestContext {
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();
        Self {
            config: Config::default(),
        }
    }

    /// Adjusts the pipeline configuration.
    pub fn with_pipeline(mut self, f: impl FnOnce(&mut PipelineConfig)) -> Self {
        f(&mut self.config.pipeline);
        self
    }

    /// Sets a cycle limit.
    pub fn with_max_cycles(mut self, limit: u64) -> Self {
        self.config.general.max_cycles = Some(limit);
        self
    }

    /// A fresh engine for this configuration.
    pub fn engine(&self) -> TomasuloEngine {
        TomasuloEngine::new(&self.config)
    }

    /// Runs `trace` to completion and returns the cycle count.
    pub fn run(&self, trace: &mut InstructionTrace) -> u64 {
        self.engine().run(trace).unwrap()
    }

    /// Runs `trace` and returns the drained engine for inspection.
    pub fn run_engine(&self, trace: &mut InstructionTrace) -> (u64, TomasuloEngine) {
        let mut engine = self.engine();
        let cycles = engine.run(trace).unwrap();
        (cycles, engine)
    }

    pub fn simulator(&self) -> Simulator {
        Simulator::new(self.config.clone()).unwrap()
    }
}

/// The `n`th instruction of a trace (0-based).
pub fn nth(trace: &InstructionTrace, n: usize) -> &Instruction {
    &trace[InstId(n)]
}
