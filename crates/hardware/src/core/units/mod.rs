//! Execution units and functional components.
//!
//! The Tomasulo engine models functional units only as timed slots, so the
//! only unit with behavior of its own is the branch prediction unit.

/// Branch prediction unit: direction predictors and their selection wrapper.
pub mod bru;
