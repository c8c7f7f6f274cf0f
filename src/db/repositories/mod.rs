//! Repository implementations.

#[cfg(feature = "file-repo")]
pub mod file;
#[cfg(feature = "local-repo")]
pub mod memory;

#[cfg(feature = "file-repo")]
pub use file::JsonFileRepository;
#[cfg(feature = "local-repo")]
pub use memory::MemoryRepository;
