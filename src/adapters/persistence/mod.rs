//! Persistence Adapters - Key-Value Storage Backends
//!
//! Implements the `KeyValueStorage` port with a directory of atomic
//! JSON files and with a process-local map.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
