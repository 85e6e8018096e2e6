//! Storage Adapters
//!
//! Implementations of the PreferenceStore port.
//!
//! ## Available Adapters
//!
//! - **FileStore** - Persists preferences as a single YAML file on disk
//! - **InMemoryStore** - Holds preferences in memory (testing/development)

mod file_store;
mod in_memory_store;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;
