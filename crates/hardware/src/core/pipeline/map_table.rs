//! Register map table.
//!
//! Maps each architectural register to the in-flight instruction that will
//! produce its value, or `None` if the value is already committed. Dispatch
//! reads it to resolve RAW dependencies and overwrites it for every
//! destination; retire clears an entry only while it still names the retiring
//! instruction, so an older producer never erases a newer rename.

use crate::common::reg::{RegId, TOTAL_REGS};
use crate::isa::instruction::InstId;

/// Register to producing-instruction map.
#[derive(Clone, Debug)]
pub struct MapTable {
    producers: [Option<InstId>; TOTAL_REGS],
}

impl Default for MapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MapTable {
    /// Creates a map table with every register committed.
    pub const fn new() -> Self {
        Self {
            producers: [None; TOTAL_REGS],
        }
    }

    /// Records `id` as the latest producer of `reg`.
    /// No-op for `r0` (hardwired zero).
    pub fn set_producer(&mut self, reg: RegId, id: InstId) {
        if !reg.is_zero() {
            self.producers[reg.index()] = Some(id);
        }
    }

    /// Returns the live producer of `reg`, if any.
    pub fn producer(&self, reg: RegId) -> Option<InstId> {
        self.producers[reg.index()]
    }

    /// Clears `reg`, but only if its current producer is `id`.
    pub fn clear_if_match(&mut self, reg: RegId, id: InstId) {
        let slot = &mut self.producers[reg.index()];
        if *slot == Some(id) {
            *slot = None;
        }
    }

    /// True if no register has a pending producer.
    pub fn is_clear(&self) -> bool {
        self.producers.iter().all(Option::is_none)
    }
}
