//! Domain model for stored documents.
//!
//! # Responsibility
//! - Define the canonical record shape used by core persistence logic.
//! - Keep one flat JSON-compatible shape for all embedding callers.
//!
//! # Invariants
//! - Every stored object is identified by a stable string `id`.
//! - Deletion is a hard removal from the mapping, not a tombstone.

pub mod document;
