//! Instruction records as seen by the Tomasulo pipeline.
//!
//! The pipeline never looks at encodings or computes values; it only needs to
//! know what class of resource an instruction uses, which registers it reads
//! and writes, and where it is in program order. This module provides:
//! 1. **Operation classes:** `OpClass` and the resource predicates derived from it.
//! 2. **Timestamps:** The four per-stage cycle stamps recorded during simulation.
//! 3. **Records:** `Instruction`, holding static metadata plus mutable timing and dependency state.

use serde::{Deserialize, Serialize};

use crate::common::error::{OperandKind, SimError};
use crate::common::reg::RegId;

/// Maximum number of source registers per instruction.
pub const MAX_SRC: usize = 3;

/// Maximum number of destination registers per instruction.
pub const MAX_DST: usize = 2;

/// Non-owning reference to an instruction record inside an
/// [`InstructionTrace`](crate::isa::trace::InstructionTrace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstId(pub usize);

/// Operation class of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpClass {
    /// Integer computation.
    IntComp,
    /// Floating-point computation.
    FpComp,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// Unconditional branch, jump or call.
    UncondBranch,
    /// Conditional branch.
    CondBranch,
    /// System call / trap. Never enters the pipeline.
    Trap,
}

impl OpClass {
    /// True if the instruction executes on an integer functional unit.
    #[inline]
    pub const fn uses_int_unit(self) -> bool {
        matches!(self, Self::IntComp | Self::Load | Self::Store)
    }

    /// True if the instruction executes on a floating-point functional unit.
    #[inline]
    pub const fn uses_fp_unit(self) -> bool {
        matches!(self, Self::FpComp)
    }

    /// True if the instruction produces a result that is broadcast on the CDB.
    #[inline]
    pub const fn writes_result(self) -> bool {
        matches!(self, Self::IntComp | Self::Load | Self::FpComp)
    }

    /// True for conditional and unconditional control transfers.
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::UncondBranch | Self::CondBranch)
    }

    /// True for trap instructions.
    #[inline]
    pub const fn is_trap(self) -> bool {
        matches!(self, Self::Trap)
    }
}

/// Cycle stamps recorded as an instruction advances. `None` means the stage
/// has not been reached yet; cycle numbering starts at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Timestamps {
    /// Cycle the instruction was (last) at the head of the fetch queue.
    pub dispatch: Option<u64>,
    /// Cycle the instruction was first seen in a reservation station.
    pub issue: Option<u64>,
    /// Cycle execution started on a functional unit.
    pub execute: Option<u64>,
    /// Cycle the result was broadcast on the CDB.
    pub cdb: Option<u64>,
}

/// A single instruction record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Program-order index (1-based, assigned when pushed into a trace).
    pub index: u64,
    /// Program counter, kept for reporting.
    pub pc: u64,
    /// Operation class.
    pub op: OpClass,
    /// Source registers.
    pub src: [Option<RegId>; MAX_SRC],
    /// Destination registers.
    pub dst: [Option<RegId>; MAX_DST],
    /// Stage timestamps.
    pub timing: Timestamps,
    /// Producers this instruction waits on, one per source slot.
    pub deps: [Option<InstId>; MAX_SRC],
}

impl Instruction {
    /// Creates a record with the given operands.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TooManyOperands`] if more than [`MAX_SRC`] sources or
    /// [`MAX_DST`] destinations are given.
    pub fn new(op: OpClass, src: &[RegId], dst: &[RegId]) -> Result<Self, SimError> {
        Ok(Self {
            index: 0,
            pc: 0,
            op,
            src: pack(src, OperandKind::Source)?,
            dst: pack(dst, OperandKind::Destination)?,
            timing: Timestamps::default(),
            deps: [None; MAX_SRC],
        })
    }

    /// Sets the program counter.
    #[must_use]
    pub const fn with_pc(mut self, pc: u64) -> Self {
        self.pc = pc;
        self
    }

    /// Source registers that take part in renaming (skips `r0`).
    pub fn renamed_sources(&self) -> impl Iterator<Item = (usize, RegId)> + '_ {
        self.src
            .iter()
            .enumerate()
            .filter_map(|(slot, reg)| reg.filter(|r| !r.is_zero()).map(|r| (slot, r)))
    }

    /// Destination registers that take part in renaming (skips `r0`).
    pub fn renamed_destinations(&self) -> impl Iterator<Item = RegId> + '_ {
        self.dst.iter().flatten().copied().filter(|r| !r.is_zero())
    }

    /// Clears timestamps and dependencies so the record can be simulated again.
    pub fn reset(&mut self) {
        self.timing = Timestamps::default();
        self.deps = [None; MAX_SRC];
    }
}

/// Copies `regs` into a fixed-size operand array.
fn pack<const N: usize>(regs: &[RegId], kind: OperandKind) -> Result<[Option<RegId>; N], SimError> {
    if regs.len() > N {
        return Err(SimError::TooManyOperands {
            kind,
            count: regs.len(),
            max: N,
        });
    }
    let mut out = [None; N];
    for (slot, reg) in out.iter_mut().zip(regs) {
        *slot = Some(*reg);
    }
    Ok(out)
}
