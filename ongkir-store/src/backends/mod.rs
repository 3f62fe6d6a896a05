//! Override store implementations
//!
//! - `memory`: In-memory storage, also used for statically configured overrides
//! - `test`: Test utilities with failure injection and lookup recording

pub mod memory;

pub use memory::MemoryRateStore;
pub use test::TestRateStore;
