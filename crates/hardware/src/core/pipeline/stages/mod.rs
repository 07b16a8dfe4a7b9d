//! Tomasulo pipeline stage implementations.
//!
//! Each stage is a free function over the engine context and the trace. The
//! engine calls them once per cycle, oldest stage first, so that no
//! instruction moves through two stages in the same cycle:
//! 1. **Retire:** Frees the instruction broadcast on the CDB last cycle.
//! 2. **Execute:** Moves finished instructions onto the CDB, oldest first.
//! 3. **Issue:** Starts ready reservation-station occupants on free functional units.
//! 4. **Dispatch:** Moves the fetch-queue head into a reservation station and renames it.
//! 5. **Fetch:** Pulls the next non-trap instruction from the trace.

/// Instruction dispatch (fetch queue to reservation station).
pub mod dispatch;

/// Execution completion and CDB arbitration.
pub mod execute;

/// Instruction fetch from the trace.
pub mod fetch;

/// Issue of ready instructions to functional units.
pub mod issue;

/// Retirement of the instruction on the CDB.
pub mod retire;

/// Dispatch stage entry point.
pub use dispatch::dispatch_stage;
/// Execute-to-CDB stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Issue-to-execute stage entry point.
pub use issue::issue_stage;
/// CDB retire stage entry point.
pub use retire::retire_stage;
