//! Backing-file bootstrap.
//!
//! # Responsibility
//! - Read the backing file into the in-memory document mapping.
//! - Initialize an empty mapping (and the parent directory) when absent.
//!
//! # Invariants
//! - A missing file is recovered locally; any other read failure is fatal.
//! - Parse failures are surfaced, never masked with an empty mapping.

use super::DbResult;
use crate::model::document::Document;
use log::{error, info};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Loads the document mapping from the backing file at `path`.
///
/// When the file does not exist the parent directory is created and an
/// empty mapping is returned; the file itself is only written by the first
/// persist.
///
/// # Side effects
/// - May create the parent directory of `path`.
/// - Emits `store_open` logging events with duration and status.
pub fn load_db(path: impl AsRef<Path>) -> DbResult<BTreeMap<String, Document>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start path={}",
        path.display()
    );

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            ensure_parent_dir(path)?;
            info!(
                "event=store_open module=db status=ok mode=empty duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(BTreeMap::new());
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error duration_ms={} error_code=store_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_str::<BTreeMap<String, Document>>(&raw) {
        Ok(documents) => {
            info!(
                "event=store_open module=db status=ok mode=file duration_ms={} documents={}",
                started_at.elapsed().as_millis(),
                documents.len()
            );
            Ok(documents)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error duration_ms={} error_code=store_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

fn ensure_parent_dir(path: &Path) -> DbResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
