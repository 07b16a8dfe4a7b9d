//! Program-ordered instruction trace.
//!
//! The trace owns every instruction record for the lifetime of a run. Pipeline
//! structures (fetch queue, reservation stations, functional units, CDB, map
//! table) hold [`InstId`] handles into it rather than references, so a record
//! can be referenced from several places while still being mutated stage by
//! stage.

use std::ops::{Index, IndexMut};

use crate::isa::instruction::{InstId, Instruction};

/// Ordered collection of instruction records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionTrace {
    records: Vec<Instruction>,
}

impl InstructionTrace {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record, assigning its 1-based program-order index.
    ///
    /// # Returns
    ///
    /// The handle of the new record.
    pub fn push(&mut self, mut inst: Instruction) -> InstId {
        let id = InstId(self.records.len());
        inst.index = id.0 as u64 + 1;
        self.records.push(inst);
        id
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the trace holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.records.iter()
    }

    /// Clears the timing and dependency state of every record.
    pub fn reset_timing(&mut self) {
        for inst in &mut self.records {
            inst.reset();
        }
    }
}

impl Index<InstId> for InstructionTrace {
    type Output = Instruction;

    fn index(&self, id: InstId) -> &Self::Output {
        &self.records[id.0]
    }
}

impl IndexMut<InstId> for InstructionTrace {
    fn index_mut(&mut self, id: InstId) -> &mut Self::Output {
        &mut self.records[id.0]
    }
}

impl FromIterator<Instruction> for InstructionTrace {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        let mut trace = Self::new();
        for inst in iter {
            let _ = trace.push(inst);
        }
        trace
    }
}

impl<'a> IntoIterator for &'a InstructionTrace {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
