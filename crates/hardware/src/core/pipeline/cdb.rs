//! Common data bus.
//!
//! A single-slot broadcast channel: at most one instruction is on the bus at
//! a time. The instruction's own `cdb` timestamp records when it was put there.

use crate::isa::instruction::InstId;

/// Single-entry common data bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommonDataBus {
    slot: Option<InstId>,
}

impl CommonDataBus {
    /// Creates an idle bus.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Places `id` on the bus.
    pub fn broadcast(&mut self, id: InstId) {
        debug_assert!(self.slot.is_none(), "CDB already holds {:?}", self.slot);
        self.slot = Some(id);
    }

    /// Instruction currently on the bus.
    pub const fn current(&self) -> Option<InstId> {
        self.slot
    }

    /// Removes and returns the instruction on the bus.
    pub fn take(&mut self) -> Option<InstId> {
        self.slot.take()
    }

    /// True if nothing is on the bus.
    pub const fn is_idle(&self) -> bool {
        self.slot.is_none()
    }
}
