//! Backing-file persist path.
//!
//! # Responsibility
//! - Serialize the full mapping compactly and overwrite the backing file.
//! - Enforce the configured serialized-size budget before touching disk.
//!
//! # Invariants
//! - The size check uses encoded UTF-8 byte length, not character count.
//! - A rejected persist leaves the previous file contents untouched.

use super::{DbError, DbResult};
use crate::model::document::Document;
use log::{debug, error};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Serializes `documents` and overwrites the backing file at `path`.
///
/// The write is a direct overwrite of the existing file, not a temp-file
/// swap; concurrent access from a second process is not coordinated.
///
/// # Errors
/// - `DbError::SizeLimitExceeded` when the compact serialized form is larger
///   than `max_size_bytes`; nothing is written in that case.
/// - I/O failures from the underlying write.
///
/// # Side effects
/// - Emits `store_persist` logging events with payload size and duration.
pub fn persist_db(
    path: impl AsRef<Path>,
    documents: &BTreeMap<String, Document>,
    max_size_bytes: u64,
) -> DbResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let payload = serde_json::to_string(documents)?;
    let serialized_bytes = payload.len() as u64;

    if serialized_bytes > max_size_bytes {
        error!(
            "event=store_persist module=db status=error duration_ms={} error_code=size_limit_exceeded bytes={} limit_bytes={}",
            started_at.elapsed().as_millis(),
            serialized_bytes,
            max_size_bytes
        );
        return Err(DbError::SizeLimitExceeded {
            limit_bytes: max_size_bytes,
            serialized_bytes,
        });
    }

    if let Err(err) = fs::write(path, payload) {
        error!(
            "event=store_persist module=db status=error duration_ms={} error_code=store_write_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err.into());
    }

    debug!(
        "event=store_persist module=db status=ok duration_ms={} documents={} bytes={}",
        started_at.elapsed().as_millis(),
        documents.len(),
        serialized_bytes
    );
    Ok(())
}
