//! # Unit Components
//!
//! This module serves as the central hub for component-level tests: the
//! configuration layer, the Tomasulo core and predictors, the simulation
//! harness around them, and statistics.

/// Configuration defaults, JSON parsing and validation.
pub mod config;



/// Statistics counters, derived metrics and printing.
pub mod stats_comprehensive;
