//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait shared by every direction
//! predictor. Predictors are independent of the Tomasulo engine; the branch
//! driver in [`crate::sim::branch_sim`] calls them once per resolved branch.

/// Trait for branch direction prediction algorithms.
pub trait BranchPredictor {
    /// Predicts whether the branch at `pc` will be taken.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    ///
    /// # Returns
    ///
    /// `true` for taken, `false` for not taken.
    fn predict(&self, pc: u64) -> bool;

    /// Trains the predictor with the resolved outcome of a branch.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `resolved` - Whether the branch was actually taken
    /// * `predicted` - The direction returned by the preceding `predict`
    /// * `target` - The branch target address
    fn update(&mut self, pc: u64, resolved: bool, predicted: bool, target: u64);
}
