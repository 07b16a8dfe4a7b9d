//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Each PC selects
//! a row of weights; the output is the bias weight plus the history weights,
//! each added when the matching global history bit is taken and subtracted
//! otherwise. Bit 0 of the history is not used; weight `i` pairs with bit `i`.

use super::BranchPredictor;
use crate::config::PerceptronConfig;

/// Perceptron Predictor structure.
#[derive(Clone, Debug)]
pub struct PerceptronPredictor {
    /// Global History Register.
    ghr: u64,
    /// Table of weights (flattened, `row_size` per row, bias first).
    table: Vec<i32>,
    /// Mask for indexing the table.
    table_mask: u64,
    /// Weights per row (bias included).
    row_size: usize,
    /// Training threshold and bias saturation bound.
    threshold: i32,
}

impl PerceptronPredictor {
    /// Creates a predictor with all weights zero and an empty history.
    pub fn new(config: &PerceptronConfig) -> Self {
        Self {
            ghr: 0,
            table: vec![0; config.table_size * config.history_length],
            table_mask: config.table_size as u64 - 1,
            row_size: config.history_length,
            threshold: config.threshold,
        }
    }

    fn row(&self, pc: u64) -> usize {
        (pc & self.table_mask) as usize * self.row_size
    }

    fn history_bit(&self, i: usize) -> bool {
        (self.ghr >> i) & 1 != 0
    }

    /// Computes the perceptron output for the row selected by `pc`.
    pub fn output(&self, pc: u64) -> i32 {
        let base = self.row(pc);
        let weights = &self.table[base..base + self.row_size];
        weights
            .iter()
            .enumerate()
            .skip(1)
            .fold(weights[0], |y, (i, &w)| {
                if self.history_bit(i) {
                    y.saturating_add(w)
                } else {
                    y.saturating_sub(w)
                }
            })
    }
}

impl BranchPredictor for PerceptronPredictor {
    /// Predicts taken if the perceptron output is non-negative.
    fn predict(&self, pc: u64) -> bool {
        self.output(pc) >= 0
    }

    /// Trains the row on a misprediction or when the output magnitude is
    /// within the threshold, then shifts the outcome into the global history.
    fn update(&mut self, pc: u64, resolved: bool, predicted: bool, _target: u64) {
        let y = self.output(pc);

        if resolved != predicted || y.unsigned_abs() <= self.threshold.unsigned_abs() {
            let base = self.row(pc);

            let bias = &mut self.table[base];
            *bias = if resolved {
                (*bias + 1).min(self.threshold)
            } else {
                (*bias - 1).max(-self.threshold)
            };

            for i in 1..self.row_size {
                let agree = resolved == self.history_bit(i);
                let w = &mut self.table[base + i];
                *w = if agree { w.saturating_add(1) } else { w.saturating_sub(1) };
            }
        }

        self.ghr = (self.ghr << 1) | u64::from(resolved);
    }
}
