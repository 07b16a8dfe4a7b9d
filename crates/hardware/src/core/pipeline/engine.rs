//! Tomasulo execution engine.
//!
//! `TomasuloEngine` is the explicit context every stage operates on. It owns
//! all pipeline structures but none of the instruction records, which stay in
//! the [`InstructionTrace`] and are referenced by [`InstId`](crate::isa::InstId).
//! It provides:
//! 1. **State:** Fetch queue, map table, per-class stations and units, CDB, trace cursor.
//! 2. **Cycle loop:** `tick` runs the five stages oldest-first and advances the counter.
//! 3. **Termination:** `is_drained` reports when nothing is left in flight or unfetched.

use tracing::{info, trace};

use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::pipeline::cdb::CommonDataBus;
use crate::core::pipeline::fetch_queue::FetchQueue;
use crate::core::pipeline::map_table::MapTable;
use crate::core::pipeline::stages::{
    dispatch_stage, execute_stage, fetch_stage, issue_stage, retire_stage,
};
use crate::core::pipeline::stations::{ClassResources, ExecClass};
use crate::isa::trace::InstructionTrace;
use crate::stats::SimStats;

/// Engine state for one simulation run.
#[derive(Clone, Debug)]
pub struct TomasuloEngine {
    /// Instruction fetch queue.
    pub fetch_queue: FetchQueue,
    /// Register map table.
    pub map_table: MapTable,
    /// Integer stations and units.
    pub int: ClassResources,
    /// Floating-point stations and units.
    pub fp: ClassResources,
    /// Common data bus.
    pub cdb: CommonDataBus,
    /// Number of trace records consumed by fetch (traps included).
    pub cursor: usize,
    /// Current cycle. Starts at 1.
    pub cycle: u64,
    /// Run statistics.
    pub stats: SimStats,
    max_cycles: Option<u64>,
}

impl TomasuloEngine {
    /// Creates an idle engine sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            fetch_queue: FetchQueue::new(config.pipeline.fetch_queue_capacity),
            map_table: MapTable::new(),
            int: ClassResources::new(ExecClass::Int, &config.pipeline),
            fp: ClassResources::new(ExecClass::Fp, &config.pipeline),
            cdb: CommonDataBus::new(),
            cursor: 0,
            cycle: 1,
            stats: SimStats::default(),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Resources of one execution class.
    pub const fn resources(&self, class: ExecClass) -> &ClassResources {
        match class {
            ExecClass::Int => &self.int,
            ExecClass::Fp => &self.fp,
        }
    }

    /// Mutable resources of one execution class.
    pub const fn resources_mut(&mut self, class: ExecClass) -> &mut ClassResources {
        match class {
            ExecClass::Int => &mut self.int,
            ExecClass::Fp => &mut self.fp,
        }
    }

    /// Runs one cycle of all stages, then advances the cycle counter.
    ///
    /// Stages run in reverse pipeline order (retire first, fetch last) so an
    /// instruction advances at most one stage per cycle.
    pub fn tick(&mut self, trace: &mut InstructionTrace) {
        trace!(cycle = self.cycle, queued = self.fetch_queue.len(), "tick");
        retire_stage(self, trace);
        execute_stage(self, trace);
        issue_stage(self, trace);
        dispatch_stage(self, trace);
        fetch_stage(self, trace);
        self.cycle += 1;
    }

    /// True once every station, unit, the fetch queue and the CDB are empty
    /// and the whole trace has been fetched.
    pub fn is_drained(&self, trace: &InstructionTrace) -> bool {
        self.int.is_idle()
            && self.fp.is_idle()
            && self.fetch_queue.is_empty()
            && self.cdb.is_idle()
            && self.cursor >= trace.len()
    }

    /// Simulates `trace` to completion.
    ///
    /// At least one cycle always runs, so an empty trace takes one cycle and
    /// returns 2.
    ///
    /// # Returns
    ///
    /// The cycle counter after the increment that follows the last cycle.
    /// Every record in `trace` holds its final timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimitExceeded`] if a cycle limit is configured
    /// and the pipeline has not drained within it.
    pub fn run(&mut self, trace: &mut InstructionTrace) -> SimResult<u64> {
        loop {
            self.tick(trace);
            if self.is_drained(trace) {
                break;
            }
            if let Some(limit) = self.max_cycles.filter(|&limit| self.cycle > limit) {
                return Err(SimError::CycleLimitExceeded { limit });
            }
        }
        debug_assert!(self.map_table.is_clear(), "map table not clear after drain");

        self.stats.cycles = self.cycle;
        info!(
            cycles = self.cycle,
            instructions = self.stats.fetched,
            "pipeline drained"
        );
        Ok(self.cycle)
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
