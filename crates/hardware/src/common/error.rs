//! Simulator error definitions.
//!
//! The Tomasulo engine itself is closed-world: its invariants hold by
//! construction and empty-state queries return `None`. Errors only arise at the
//! boundary, where traces and configuration come in from the outside world:
//! 1. **I/O:** A trace or config file could not be read.
//! 2. **Parsing:** Malformed JSON, unknown register names, or oversize operand lists.
//! 3. **Configuration:** Structurally invalid pipeline or predictor parameters.
//! 4. **Divergence:** The optional cycle guard tripped before the pipeline drained.

use std::path::PathBuf;

use thiserror::Error;

/// Operand list kind, used when reporting oversize operand lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// Source (input) registers.
    Source,
    /// Destination (output) registers.
    Destination,
}

impl std::fmt::Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors reported by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (trace or config) was malformed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A simulation report could not be rendered as JSON.
    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),

    /// The configuration is structurally invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A register name could not be parsed.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// A numeric register id is outside the architectural register space.
    #[error("register id {0} is out of range")]
    RegisterOutOfRange(usize),

    /// An instruction names more operands than the record can hold.
    #[error("{count} {kind} registers given, at most {max} allowed")]
    TooManyOperands {
        /// Which operand list overflowed.
        kind: OperandKind,
        /// Number of operands supplied.
        count: usize,
        /// Capacity of the operand list.
        max: usize,
    },

    /// The pipeline did not drain within the configured cycle budget.
    #[error("pipeline did not drain within {limit} cycles")]
    CycleLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}

/// Convenience alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;
