//! Instruction Fetch Stage.
//!
//! Pulls at most one non-trap instruction per cycle from the trace into the
//! fetch queue. Traps are consumed by the cursor but never enqueued. After
//! fetching, the queue head is stamped with the current cycle as its dispatch
//! cycle; an instruction stuck at the head is re-stamped every cycle.

use tracing::trace;

use crate::core::pipeline::engine::TomasuloEngine;
use crate::isa::instruction::InstId;
use crate::isa::trace::InstructionTrace;

/// Executes the fetch stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the engine state
/// * `trace` - The instruction trace being simulated
pub fn fetch_stage(engine: &mut TomasuloEngine, trace: &mut InstructionTrace) {
    if !engine.fetch_queue.is_full() {
        while engine.cursor < trace.len() {
            let id = InstId(engine.cursor);
            engine.cursor += 1;

            if trace[id].op.is_trap() {
                engine.stats.traps_skipped += 1;
                trace!(cycle = engine.cycle, index = trace[id].index, "skipping trap");
                continue;
            }

            engine.fetch_queue.push(id);
            engine.stats.fetched += 1;
            trace!(cycle = engine.cycle, index = trace[id].index, "fetched");
            break;
        }
    }

    if let Some(head) = engine.fetch_queue.peek() {
        trace[head].timing.dispatch = Some(engine.cycle);
    }
}
