//! Trace Loader.
//!
//! This module reads the JSON trace formats consumed by the simulator. It performs:
//! 1. **Instruction traces:** `{"instructions": [{"op": "IntComp", "pc": 4096, "src": ["r1"], "dst": ["r3"]}]}`
//!    where `pc`, `src` and `dst` are optional.
//! 2. **Branch traces:** `{"branches": [{"pc": 4096, "taken": true, "target": 4160}]}`
//!    where `target` is optional.
//! 3. **Register names:** `rN`, `fN`, `hi`, `lo`, `fcc`, or a raw `$N` id.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::common::error::{SimError, SimResult};
use crate::common::reg::RegId;
use crate::isa::instruction::{Instruction, OpClass};
use crate::isa::trace::InstructionTrace;
use crate::sim::branch_sim::BranchRecord;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TraceFile {
    instructions: Vec<TraceEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TraceEntry {
    op: OpClass,
    #[serde(default)]
    pc: u64,
    #[serde(default)]
    src: Vec<String>,
    #[serde(default)]
    dst: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BranchFile {
    branches: Vec<BranchRecord>,
}

impl TraceEntry {
    fn into_instruction(self) -> SimResult<Instruction> {
        let src = parse_regs(&self.src)?;
        let dst = parse_regs(&self.dst)?;
        Ok(Instruction::new(self.op, &src, &dst)?.with_pc(self.pc))
    }
}

fn parse_regs(names: &[String]) -> SimResult<Vec<RegId>> {
    names.iter().map(|name| name.parse()).collect()
}

fn read(path: &Path) -> SimResult<String> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an instruction trace from a JSON document.
///
/// # Errors
///
/// Returns [`SimError::Json`] for malformed JSON or an unknown op class,
/// [`SimError::UnknownRegister`] / [`SimError::RegisterOutOfRange`] for bad
/// register names, and [`SimError::TooManyOperands`] for oversize operand lists.
pub fn parse_trace(json: &str) -> SimResult<InstructionTrace> {
    let file: TraceFile = serde_json::from_str(json)?;
    let mut trace = InstructionTrace::new();
    for entry in file.instructions {
        let _ = trace.push(entry.into_instruction()?);
    }
    Ok(trace)
}

/// Reads and parses an instruction trace file.
///
/// # Arguments
///
/// * `path` - Path to the JSON trace.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_trace`].
pub fn load_trace(path: impl AsRef<Path>) -> SimResult<InstructionTrace> {
    let path = path.as_ref();
    let trace = parse_trace(&read(path)?)?;
    debug!(path = %path.display(), instructions = trace.len(), "loaded instruction trace");
    Ok(trace)
}

/// Parses a branch trace from a JSON document.
///
/// # Errors
///
/// Returns [`SimError::Json`] for malformed JSON.
pub fn parse_branches(json: &str) -> SimResult<Vec<BranchRecord>> {
    let file: BranchFile = serde_json::from_str(json)?;
    Ok(file.branches)
}

/// Reads and parses a branch trace file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_branches`].
pub fn load_branches(path: impl AsRef<Path>) -> SimResult<Vec<BranchRecord>> {
    let path = path.as_ref();
    let branches = parse_branches(&read(path)?)?;
    debug!(path = %path.display(), branches = branches.len(), "loaded branch trace");
    Ok(branches)
}
