//! Core processor model.
//!
//! This module contains the Tomasulo out-of-order pipeline and the branch
//! prediction unit that is evaluated alongside it.

/// Tomasulo pipeline (fetch queue, map table, stations, CDB, stages, engine).
pub mod pipeline;

/// Execution units (branch predictors).
pub mod units;

pub use self::pipeline::TomasuloEngine;
