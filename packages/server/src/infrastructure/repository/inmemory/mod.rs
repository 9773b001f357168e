//! InMemory Repository 実装

pub mod registry;

pub use registry::InMemoryConnectionRegistry;
