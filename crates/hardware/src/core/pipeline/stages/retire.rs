//! CDB Retire Stage.
//!
//! One cycle after an instruction is broadcast it leaves the machine: map
//! table entries that still name it are cleared, any station or unit it holds
//! is freed, and the bus is emptied.

use tracing::debug;

use crate::core::pipeline::engine::TomasuloEngine;
use crate::core::pipeline::stations::ExecClass;
use crate::isa::trace::InstructionTrace;

/// Executes the retire stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the engine state
/// * `trace` - The instruction trace being simulated
pub fn retire_stage(engine: &mut TomasuloEngine, trace: &mut InstructionTrace) {
    let Some(id) = engine.cdb.current() else {
        return;
    };
    let inst = &trace[id];
    if inst.timing.cdb.is_some_and(|broadcast| engine.cycle < broadcast + 1) {
        return;
    }

    for reg in inst.renamed_destinations() {
        engine.map_table.clear_if_match(reg, id);
    }
    for class in [ExecClass::Int, ExecClass::Fp] {
        engine.resources_mut(class).release(id);
    }
    let _ = engine.cdb.take();
    debug!(cycle = engine.cycle, index = inst.index, "retired");
}
