//! Common types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Error Handling:** The `SimError` enum and `SimResult` alias.
//! 2. **Registers:** Validated architectural register identifiers and naming.

/// Error types reported at the library boundary.
pub mod error;

/// Architectural register identifiers.
pub mod reg;

pub use error::{SimError, SimResult};
pub use reg::RegId;
