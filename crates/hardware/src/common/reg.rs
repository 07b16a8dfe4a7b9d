//! Architectural register identifiers.
//!
//! The modeled register space is flat: integer registers, floating-point
//! registers and a handful of special registers share one index range, the way
//! the map table sees them. It provides:
//! 1. **Validation:** `RegId` can only hold an index inside the register space.
//! 2. **Naming:** Parsing and printing of `rN`, `fN`, `hi`, `lo`, `fcc` and raw `$N` names.
//! 3. **Zero register:** `r0` is hard-wired and never participates in renaming.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;

/// Number of integer registers.
pub const NUM_INT_REGS: usize = 32;

/// Number of floating-point registers.
pub const NUM_FP_REGS: usize = 32;

/// Index of the first floating-point register.
const FP_BASE: usize = NUM_INT_REGS;

/// Index of the HI multiply/divide result register.
const HI: usize = FP_BASE + NUM_FP_REGS;

/// Index of the LO multiply/divide result register.
const LO: usize = HI + 1;

/// Index of the floating-point condition code register.
const FCC: usize = LO + 1;

/// Total size of the register space (includes three scratch ids past `fcc`).
pub const TOTAL_REGS: usize = FCC + 4;

/// Architectural register identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegId(u8);

impl RegId {
    /// The hard-wired zero register `r0`.
    pub const ZERO: Self = Self(0);

    /// Creates a register id from a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx >= TOTAL_REGS`.
    pub fn new(idx: usize) -> Result<Self, SimError> {
        if idx < TOTAL_REGS {
            Ok(Self(idx as u8))
        } else {
            Err(SimError::RegisterOutOfRange(idx))
        }
    }

    /// Integer register `rN`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `n >= 32`.
    pub fn int(n: usize) -> Result<Self, SimError> {
        if n < NUM_INT_REGS {
            Self::new(n)
        } else {
            Err(SimError::RegisterOutOfRange(n))
        }
    }

    /// Floating-point register `fN`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `n >= 32`.
    pub fn fp(n: usize) -> Result<Self, SimError> {
        if n < NUM_FP_REGS {
            Self::new(FP_BASE + n)
        } else {
            Err(SimError::RegisterOutOfRange(FP_BASE.saturating_add(n)))
        }
    }

    /// Raw index into the flat register space.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the hard-wired zero register.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx = self.index();
        match idx {
            i if i < FP_BASE => write!(f, "r{i}"),
            i if i < HI => write!(f, "f{}", i - FP_BASE),
            HI => write!(f, "hi"),
            LO => write!(f, "lo"),
            FCC => write!(f, "fcc"),
            i => write!(f, "${i}"),
        }
    }
}

impl FromStr for RegId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SimError::UnknownRegister(s.to_string());
        let name = s.trim().to_ascii_lowercase();

        match name.as_str() {
            "hi" => return Self::new(HI),
            "lo" => return Self::new(LO),
            "fcc" => return Self::new(FCC),
            _ => {}
        }

        let mut chars = name.chars();
        let prefix = chars.next().ok_or_else(unknown)?;
        let n: usize = chars.as_str().parse().map_err(|_| unknown())?;
        match prefix {
            'r' => Self::int(n),
            'f' => Self::fp(n),
            '$' => Self::new(n),
            _ => Err(unknown()),
        }
    }
}

impl TryFrom<String> for RegId {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegId> for String {
    fn from(reg: RegId) -> Self {
        reg.to_string()
    }
}
