//! Two-Bit Saturating Counter Predictor.
//!
//! A single table of 2-bit counters indexed by the low bits of the PC. No
//! history is kept, so each table entry learns the bias of the branches that
//! map onto it.
//!
//! # Performance
//!
//! - **Time Complexity:** `predict()` and `update()` are O(1)
//! - **Space Complexity:** O(N) counters (4096 by default)
//! - **Best Case:** Strongly biased branches
//! - **Worst Case:** Alternating or history-correlated branches

use super::{BranchPredictor, counter::SaturatingCounter};
use crate::config::TwoBitConfig;

/// Bimodal predictor.
#[derive(Clone, Debug)]
pub struct TwoBitPredictor {
    table: Vec<SaturatingCounter>,
    mask: u64,
}

impl TwoBitPredictor {
    /// Creates a predictor with every counter weakly not-taken.
    ///
    /// `config.entries` must be a power of two (checked by [`Config::validate`](crate::config::Config::validate)).
    pub fn new(config: &TwoBitConfig) -> Self {
        Self {
            table: vec![SaturatingCounter::default(); config.entries],
            mask: config.entries as u64 - 1,
        }
    }

    fn index(&self, pc: u64) -> usize {
        (pc & self.mask) as usize
    }
}

impl BranchPredictor for TwoBitPredictor {
    fn predict(&self, pc: u64) -> bool {
        self.table[self.index(pc)].predicts_taken()
    }

    fn update(&mut self, pc: u64, resolved: bool, _predicted: bool, _target: u64) {
        let idx = self.index(pc);
        self.table[idx] = self.table[idx].train(resolved);
    }
}
