//! Issue Stage.
//!
//! Starts waiting instructions on free functional units. For every free unit,
//! integer units first, the oldest ready station occupant of that class is
//! chosen. An occupant is ready once it has an issue cycle, has not started
//! executing, and every producer it depends on broadcast on the CDB in an
//! earlier cycle. A result on the CDB this very cycle is not forwarded yet.
//! The instruction keeps its station while executing.

use tracing::trace;

use crate::core::pipeline::engine::TomasuloEngine;
use crate::core::pipeline::stations::ExecClass;
use crate::isa::instruction::InstId;
use crate::isa::trace::InstructionTrace;

/// Executes the issue stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the engine state
/// * `trace` - The instruction trace being simulated
pub fn issue_stage(engine: &mut TomasuloEngine, trace: &mut InstructionTrace) {
    let cycle = engine.cycle;
    for class in [ExecClass::Int, ExecClass::Fp] {
        let res = engine.resources_mut(class);
        while res.units.has_free() {
            let Some(id) = oldest_ready(res.stations.occupants(), trace, cycle) else {
                break;
            };
            let _ = res.units.allocate(id);
            trace[id].timing.execute = Some(cycle);
            trace!(cycle, index = trace[id].index, ?class, "execute start");
        }
    }
}

/// Oldest occupant that may start executing in `cycle`.
fn oldest_ready(
    candidates: impl Iterator<Item = InstId>,
    trace: &InstructionTrace,
    cycle: u64,
) -> Option<InstId> {
    candidates
        .filter(|&id| is_ready(trace, id, cycle))
        .min_by_key(|&id| trace[id].index)
}

fn is_ready(trace: &InstructionTrace, id: InstId, cycle: u64) -> bool {
    let inst = &trace[id];
    if inst.timing.issue.is_none() || inst.timing.execute.is_some() {
        return false;
    }
    inst.deps.iter().flatten().all(|&dep| {
        trace[dep]
            .timing
            .cdb
            .is_some_and(|broadcast| broadcast < cycle)
    })
}
