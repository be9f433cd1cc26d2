//! ArchAI Store - Project storage port and adapters
//!
//! This crate defines the record-store port the HTTP surface persists
//! projects through, plus an in-memory adapter.

pub mod memory;
pub mod ports;

pub use memory::MemoryProjectStore;
pub use ports::{ProjectStore, ProjectUpdate};
