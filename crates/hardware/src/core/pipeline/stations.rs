//! Reservation stations and functional units.
//!
//! Both are fixed arrays of slots holding at most one instruction handle each,
//! so they share one type, [`SlotBank`]. Slot order is stable: allocation
//! always takes the lowest free slot. [`ClassResources`] groups the stations,
//! units and latency of one execution class (integer or floating-point).

use crate::config::PipelineConfig;
use crate::isa::instruction::{InstId, OpClass};

/// Execution resource class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecClass {
    /// Integer compute, loads and stores.
    Int,
    /// Floating-point compute.
    Fp,
}

impl ExecClass {
    /// Class whose resources `op` uses, or `None` for branches and traps.
    pub const fn of(op: OpClass) -> Option<Self> {
        if op.uses_fp_unit() {
            Some(Self::Fp)
        } else if op.uses_int_unit() {
            Some(Self::Int)
        } else {
            None
        }
    }
}

/// Fixed-size array of single-instruction slots.
#[derive(Clone, Debug)]
pub struct SlotBank {
    slots: Vec<Option<InstId>>,
}

impl SlotBank {
    /// Creates a bank with `size` empty slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Places `id` in the lowest free slot.
    ///
    /// # Returns
    ///
    /// The slot index, or `None` if every slot is occupied.
    pub fn allocate(&mut self, id: InstId) -> Option<usize> {
        debug_assert!(!self.contains(id), "{id:?} already holds a slot");
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(id);
        Some(slot)
    }

    /// Frees the slot holding `id`, if any.
    ///
    /// # Returns
    ///
    /// `true` if a slot was freed.
    pub fn release(&mut self, id: InstId) -> bool {
        match self.slots.iter_mut().find(|s| **s == Some(id)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// True if `id` occupies a slot.
    pub fn contains(&self, id: InstId) -> bool {
        self.slots.contains(&Some(id))
    }

    /// Occupants in slot order.
    pub fn occupants(&self) -> impl Iterator<Item = InstId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// True if at least one slot is empty.
    pub fn has_free(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    /// True if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Reservation stations, functional units and latency of one class.
#[derive(Clone, Debug)]
pub struct ClassResources {
    /// Reservation stations.
    pub stations: SlotBank,
    /// Functional units.
    pub units: SlotBank,
    /// Execution latency in cycles.
    pub latency: u64,
}

impl ClassResources {
    /// Builds the resources of `class` as sized by `config`.
    pub fn new(class: ExecClass, config: &PipelineConfig) -> Self {
        let (rs, fu, latency) = match class {
            ExecClass::Int => (config.int_rs_size, config.int_fu_count, config.int_latency),
            ExecClass::Fp => (config.fp_rs_size, config.fp_fu_count, config.fp_latency),
        };
        Self {
            stations: SlotBank::new(rs),
            units: SlotBank::new(fu),
            latency,
        }
    }

    /// True if no station or unit is occupied.
    pub fn is_idle(&self) -> bool {
        self.stations.is_empty() && self.units.is_empty()
    }

    /// Frees both the station and the unit held by `id`.
    pub fn release(&mut self, id: InstId) {
        let _ = self.stations.release(id);
        let _ = self.units.release(id);
    }
}
