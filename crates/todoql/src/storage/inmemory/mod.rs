//! In-memory storage backend.
//!
//! Items live in a `BTreeMap` keyed by `(pk, sk)` behind an `Arc<RwLock<_>>`,
//! so prefix queries come back in ascending sort-key order just like the
//! real table. Data is lost when the store is dropped.

mod store;

pub use store::InMemoryStore;
