//! somno-store
//!
//! The persistence seam. `ClinicStore` is the contract the real database
//! collaborator implements; `MemoryStore` is the in-process reference
//! implementation used by tests and development tooling.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::ClinicStore;
