//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors: a bimodal 2-bit counter
//! table, a two-level per-address (PAp) predictor, and a perceptron
//! predictor, plus the enum used to select one from configuration.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating counter shared by the table-based predictors.
pub mod counter;

/// Perceptron-based branch predictor.
pub mod perceptron;

/// Bimodal predictor (table of 2-bit counters).
pub mod two_bit;

/// Two-level adaptive predictor with per-address history.
pub mod two_level;

use self::{
    perceptron::PerceptronPredictor, two_bit::TwoBitPredictor, two_level::TwoLevelPredictor,
};
use crate::config::{BranchPredictorKind, PredictorConfig};

/// Enum wrapper for static dispatch of Branch Predictors.
#[derive(Clone, Debug)]
pub enum BranchPredictorWrapper {
    /// Bimodal 2-bit counter predictor.
    TwoBit(TwoBitPredictor),
    /// Two-level PAp predictor.
    TwoLevel(TwoLevelPredictor),
    /// Perceptron predictor.
    Perceptron(PerceptronPredictor),
}

impl BranchPredictorWrapper {
    /// Creates the predictor selected by `config.kind`.
    pub fn new(config: &PredictorConfig) -> Self {
        match config.kind {
            BranchPredictorKind::TwoBit => Self::TwoBit(TwoBitPredictor::new(&config.two_bit)),
            BranchPredictorKind::TwoLevel => {
                Self::TwoLevel(TwoLevelPredictor::new(&config.two_level))
            }
            BranchPredictorKind::Perceptron => {
                Self::Perceptron(PerceptronPredictor::new(&config.perceptron))
            }
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn predict(&self, pc: u64) -> bool {
        match self {
            Self::TwoBit(bp) => bp.predict(pc),
            Self::TwoLevel(bp) => bp.predict(pc),
            Self::Perceptron(bp) => bp.predict(pc),
        }
    }

    #[inline(always)]
    fn update(&mut self, pc: u64, resolved: bool, predicted: bool, target: u64) {
        match self {
            Self::TwoBit(bp) => bp.update(pc, resolved, predicted, target),
            Self::TwoLevel(bp) => bp.update(pc, resolved, predicted, target),
            Self::Perceptron(bp) => bp.update(pc, resolved, predicted, target),
        }
    }
}
