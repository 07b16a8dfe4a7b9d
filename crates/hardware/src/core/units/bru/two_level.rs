//! Two-Level Adaptive Predictor (PAp).
//!
//! Each branch address selects a private history register; the history and
//! the low PC bits together select a 2-bit counter in a per-address pattern
//! table. It provides:
//! 1. **History table:** `history_entries` registers indexed by `(pc >> pc_bits)`.
//! 2. **Pattern table:** `2^history_bits` rows by `2^pc_bits` columns of counters.
//! 3. **Update:** Train the selected counter, then shift the outcome into the history.

use super::{BranchPredictor, counter::SaturatingCounter};
use crate::config::TwoLevelConfig;

/// Per-address history, per-address pattern table predictor.
#[derive(Clone, Debug)]
pub struct TwoLevelPredictor {
    /// Branch history registers.
    history: Vec<u32>,
    /// Pattern table, row-major `[history][pc column]`.
    patterns: Vec<SaturatingCounter>,
    history_mask: u32,
    history_index_mask: u64,
    pc_bits: usize,
    pc_mask: u64,
}

impl TwoLevelPredictor {
    /// Creates a predictor with cleared histories and weakly not-taken counters.
    pub fn new(config: &TwoLevelConfig) -> Self {
        let rows = 1usize << config.history_bits;
        let cols = 1usize << config.pc_bits;
        Self {
            history: vec![0; config.history_entries],
            patterns: vec![SaturatingCounter::default(); rows * cols],
            history_mask: (1u32 << config.history_bits) - 1,
            history_index_mask: config.history_entries as u64 - 1,
            pc_bits: config.pc_bits,
            pc_mask: (1u64 << config.pc_bits) - 1,
        }
    }

    fn history_index(&self, pc: u64) -> usize {
        ((pc >> self.pc_bits) & self.history_index_mask) as usize
    }

    fn pattern_index(&self, pc: u64) -> usize {
        let hist = (self.history[self.history_index(pc)] & self.history_mask) as usize;
        (hist << self.pc_bits) | (pc & self.pc_mask) as usize
    }
}

impl BranchPredictor for TwoLevelPredictor {
    fn predict(&self, pc: u64) -> bool {
        self.patterns[self.pattern_index(pc)].predicts_taken()
    }

    /// Trains the counter selected by the current history, then records the outcome.
    fn update(&mut self, pc: u64, resolved: bool, _predicted: bool, _target: u64) {
        let p = self.pattern_index(pc);
        self.patterns[p] = self.patterns[p].train(resolved);

        let h = self.history_index(pc);
        self.history[h] = ((self.history[h] << 1) | u32::from(resolved)) & self.history_mask;
    }
}
