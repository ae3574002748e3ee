//! Filesystem adapters.
//!
//! `LocalFilesystem` writes the module to disk; `MemoryFilesystem` backs
//! dry runs and tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
