//! Storage implementations for different backends

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryBackend;
pub use json_file::JsonFileBackend;
