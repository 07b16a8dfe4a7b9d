//! Tomasulo pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of an out-of-order core
//! scheduled with Tomasulo's algorithm, plus a set of branch direction
//! predictors evaluated on their own:
//! 1. **Core:** Fetch queue, map table, reservation stations, functional units, CDB, and the cycle engine.
//! 2. **Predictors:** Two-bit, two-level (PAp) and perceptron direction predictors.
//! 3. **ISA:** Instruction records, operation classes and the program-ordered trace.
//! 4. **Simulation:** JSON trace loading, configuration, the run harness, and statistics.

/// Common types (errors, register identifiers).
pub mod common;
/// Simulator configuration (defaults, pipeline and predictor parameters).
pub mod config;
/// Tomasulo pipeline and branch prediction unit.
pub mod core;
/// Instruction records and traces.
pub mod isa;
/// Trace loading, run harness and branch predictor driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The Tomasulo engine; one instance per run.
pub use crate::core::TomasuloEngine;
/// Top-level simulator; validates config and runs traces on fresh engines.
pub use crate::sim::simulator::Simulator;
