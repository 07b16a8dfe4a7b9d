//! Simulation harness and trace input.
//!
//! Provides the entry points that sit around the core: loading traces from
//! JSON, running the Tomasulo engine under a validated configuration, and
//! replaying branch outcomes through a direction predictor.

/// Branch predictor evaluation driver.
pub mod branch_sim;

/// JSON instruction and branch trace loading.
pub mod loader;

/// Top-level Tomasulo simulation harness.
pub mod simulator;
