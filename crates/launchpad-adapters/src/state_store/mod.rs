//! StateStore port implementations.

pub mod json;
pub mod memory;

pub use json::JsonStateStore;
pub use memory::MemoryStateStore;
