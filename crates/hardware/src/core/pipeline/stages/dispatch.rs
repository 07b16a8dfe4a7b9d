//! Dispatch Stage.
//!
//! Looks only at the head of the fetch queue, so dispatch is in order:
//! 1. **Branches:** Popped and dropped; they never occupy a station.
//! 2. **Compute, loads and stores:** Placed in the lowest free station of their
//!    class. Sources are resolved against the map table, then the map table is
//!    pointed at the new instruction for each destination it writes.
//! 3. **Structural stall:** With no free station the head stays put and blocks
//!    everything behind it.
//!
//! Afterwards every station occupant without an issue cycle gets the current one.

use tracing::debug;

use crate::core::pipeline::engine::TomasuloEngine;
use crate::core::pipeline::stations::ExecClass;
use crate::isa::instruction::{InstId, MAX_SRC};
use crate::isa::trace::InstructionTrace;

/// Executes the dispatch stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the engine state
/// * `trace` - The instruction trace being simulated
pub fn dispatch_stage(engine: &mut TomasuloEngine, trace: &mut InstructionTrace) {
    if let Some(head) = engine.fetch_queue.peek() {
        dispatch_head(engine, trace, head);
    }

    let cycle = engine.cycle;
    for class in [ExecClass::Int, ExecClass::Fp] {
        for id in engine.resources(class).stations.occupants() {
            let timing = &mut trace[id].timing;
            if timing.issue.is_none() {
                timing.issue = Some(cycle);
            }
        }
    }
}

fn dispatch_head(engine: &mut TomasuloEngine, trace: &mut InstructionTrace, head: InstId) {
    let op = trace[head].op;

    let Some(class) = ExecClass::of(op) else {
        debug_assert!(op.is_branch(), "{op:?} reached dispatch");
        let _ = engine.fetch_queue.pop();
        engine.stats.branches_dropped += 1;
        return;
    };

    if engine.resources_mut(class).stations.allocate(head).is_none() {
        engine.stats.dispatch_stalls += 1;
        debug!(
            cycle = engine.cycle,
            index = trace[head].index,
            ?class,
            "dispatch stalled: no free reservation station"
        );
        return;
    }

    let inst = &trace[head];
    let mut deps = [None; MAX_SRC];
    for (slot, reg) in inst.renamed_sources() {
        deps[slot] = engine.map_table.producer(reg);
    }
    if op.writes_result() {
        for reg in inst.renamed_destinations() {
            engine.map_table.set_producer(reg, head);
        }
    }
    trace[head].deps = deps;

    let _ = engine.fetch_queue.pop();
    match class {
        ExecClass::Int => engine.stats.dispatched_int += 1,
        ExecClass::Fp => engine.stats.dispatched_fp += 1,
    }
}
