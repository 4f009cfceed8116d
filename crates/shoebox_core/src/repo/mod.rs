//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the document CRUD contract used by services and embedders.
//! - Keep backing-file details inside the persistence boundary.
//!
//! # Invariants
//! - Mutating APIs mirror the full mapping to disk before returning success.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod document_repo;
