//! Record source implementations

pub mod in_memory;
pub mod json;

pub use in_memory::InMemoryRecordSource;
pub use json::JsonRecordSource;
