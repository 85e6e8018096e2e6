//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Preference store implementations (in-memory, file-backed)

pub mod storage;
