//! Branch Predictor Driver.
//!
//! Replays a sequence of resolved branches through a direction predictor:
//! for each branch the predictor is asked first, then trained with the real
//! outcome and its own guess. The predictor never sees the outcome early.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::units::bru::BranchPredictor;

/// One resolved branch from a branch trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Program counter of the branch.
    pub pc: u64,
    /// Resolved direction.
    pub taken: bool,
    /// Branch target address.
    #[serde(default)]
    pub target: u64,
}

/// Prediction outcome counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BranchStats {
    /// Branches replayed.
    pub branches: u64,
    /// Branches whose predicted direction differed from the resolved one.
    pub mispredictions: u64,
}

impl BranchStats {
    /// Fraction of branches predicted correctly, `0.0` if there were none.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            (self.branches - self.mispredictions) as f64 / self.branches as f64
        }
    }

    /// Mispredictions per thousand instructions.
    ///
    /// # Arguments
    ///
    /// * `instructions` - Dynamic instruction count the branches were drawn from
    pub fn mispredictions_per_kilo(&self, instructions: u64) -> f64 {
        if instructions == 0 {
            0.0
        } else {
            self.mispredictions as f64 * 1000.0 / instructions as f64
        }
    }

    /// Prints the branch prediction summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("BRANCH PREDICTION");
        println!("==========================================================");
        println!("  bp.lookups             {}", self.branches);
        println!("  bp.mispredicts         {}", self.mispredictions);
        println!("  bp.accuracy            {:.2}%", self.accuracy() * 100.0);
        println!("==========================================================");
    }
}

/// Runs every branch in `branches` through `predictor`.
///
/// # Arguments
///
/// * `predictor` - The predictor to evaluate (trained in place)
/// * `branches` - Resolved branches in execution order
///
/// # Returns
///
/// Counts of branches and mispredictions.
pub fn run_predictor<P>(predictor: &mut P, branches: &[BranchRecord]) -> BranchStats
where
    P: BranchPredictor + ?Sized,
{
    let mut stats = BranchStats::default();
    for branch in branches {
        let predicted = predictor.predict(branch.pc);
        if predicted != branch.taken {
            stats.mispredictions += 1;
            debug!(pc = branch.pc, taken = branch.taken, "mispredicted");
        }
        predictor.update(branch.pc, branch.taken, predicted, branch.target);
        stats.branches += 1;
    }
    info!(
        branches = stats.branches,
        mispredictions = stats.mispredictions,
        "branch replay finished"
    );
    stats
}
