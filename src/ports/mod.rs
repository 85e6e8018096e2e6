//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PreferenceStore` - Key-value persistence for cycle dates and
//!   companion preferences

mod preference_store;

pub use preference_store::{PreferenceStore, StoreError, StoreKey};
