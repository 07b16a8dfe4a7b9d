//! Execute-to-CDB Stage.
//!
//! Scans the functional units for instructions whose latency has elapsed
//! (`execute + latency <= cycle`):
//! 1. **Stores:** Produce no result; they free their station and unit at once.
//! 2. **Result writers:** Compete for the single CDB slot. The oldest wins, is
//!    stamped with the current cycle, and leaves its station and unit.
//!    Losers keep their unit and try again next cycle.

use tracing::debug;

use crate::core::pipeline::engine::TomasuloEngine;
use crate::core::pipeline::stations::ExecClass;
use crate::isa::instruction::InstId;
use crate::isa::trace::InstructionTrace;

/// Executes the execute-to-CDB stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the engine state
/// * `trace` - The instruction trace being simulated
pub fn execute_stage(engine: &mut TomasuloEngine, trace: &mut InstructionTrace) {
    let cycle = engine.cycle;
    let mut candidates: Vec<(InstId, ExecClass)> = Vec::new();

    for class in [ExecClass::Int, ExecClass::Fp] {
        let res = engine.resources(class);
        let finished: Vec<InstId> = res
            .units
            .occupants()
            .filter(|&id| {
                trace[id]
                    .timing
                    .execute
                    .is_some_and(|start| start + res.latency <= cycle)
            })
            .collect();

        for id in finished {
            if trace[id].op.writes_result() {
                candidates.push((id, class));
            } else {
                engine.resources_mut(class).release(id);
                engine.stats.stores_completed += 1;
                debug!(cycle, index = trace[id].index, "store completed");
            }
        }
    }

    let Some(&(winner, class)) = candidates.iter().min_by_key(|(id, _)| trace[*id].index) else {
        return;
    };

    trace[winner].timing.cdb = Some(cycle);
    engine.cdb.broadcast(winner);
    engine.resources_mut(class).release(winner);
    engine.stats.cdb_broadcasts += 1;
    engine.stats.cdb_conflicts += (candidates.len() - 1) as u64;
    debug!(
        cycle,
        index = trace[winner].index,
        waiting = candidates.len() - 1,
        "CDB broadcast"
    );
}
