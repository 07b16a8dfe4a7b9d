//! Instruction model.
//!
//! The simulator consumes pre-decoded dynamic traces rather than binaries, so
//! this module only describes what the pipeline needs to know about each
//! instruction.
//!
//! # Contents
//!
//! * `instruction`: Operation classes, register operands and per-stage timestamps.
//! * `trace`: The ordered, indexable trace that owns every instruction record.

/// Instruction records, operation classes and timestamps.
pub mod instruction;

/// Program-ordered instruction trace (arena of records).
pub mod trace;

pub use instruction::{InstId, Instruction, OpClass, Timestamps};
pub use trace::InstructionTrace;
