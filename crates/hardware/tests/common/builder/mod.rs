//! Fluent builders for test inputs.


pub use instruction::{TraceBuilder, reg};
