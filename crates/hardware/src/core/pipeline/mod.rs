//! Tomasulo pipeline implementation.
//!
//! This module contains the out-of-order core. It includes the following components:
//! 1. **Fetch queue:** Bounded FIFO between fetch and dispatch.
//! 2. **Map table:** Register renaming to in-flight producers.
//! 3. **Stations:** Reservation stations and functional units per execution class.
//! 4. **CDB:** The single-slot common data bus.
//! 5. **Stages:** Retire, execute, issue, dispatch and fetch.
//! 6. **Engine:** The per-run context and cycle loop tying them together.

/// Common data bus.
pub mod cdb;

/// Engine context and cycle driver.
pub mod engine;

/// Instruction fetch queue.
pub mod fetch_queue;

/// Register map table.
pub mod map_table;

/// Pipeline stage implementations.
pub mod stages;

/// Reservation stations and functional units.
pub mod stations;

pub use engine::TomasuloEngine;
