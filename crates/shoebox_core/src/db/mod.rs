//! Backing-file storage layer.
//!
//! # Responsibility
//! - Load and persist the full document mapping as one JSON file.
//! - Surface I/O, parse and size-budget failures as typed errors.
//!
//! # Invariants
//! - The backing file holds a single JSON object keyed by document id.
//! - Persist never writes a payload larger than the configured size limit.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod open;
mod persist;

pub use open::load_db;
pub use persist::persist_db;

pub(crate) const BYTES_PER_MIB: u64 = 1024 * 1024;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Io(io::Error),
    Malformed(serde_json::Error),
    SizeLimitExceeded {
        limit_bytes: u64,
        serialized_bytes: u64,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed store file: {err}"),
            Self::SizeLimitExceeded {
                limit_bytes,
                serialized_bytes,
            } => write!(
                f,
                "store file size limit ({:.2} MB) exceeded: serialized mapping is \
                 {serialized_bytes} bytes; increase the `max_size_mib` option to allow more space",
                *limit_bytes as f64 / BYTES_PER_MIB as f64
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::SizeLimitExceeded { .. } => None,
        }
    }
}

impl From<io::Error> for DbError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DbError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DbError, BYTES_PER_MIB};

    #[test]
    fn size_limit_message_reports_limit_in_mb_with_two_decimals() {
        let err = DbError::SizeLimitExceeded {
            limit_bytes: 8 * BYTES_PER_MIB,
            serialized_bytes: 9 * BYTES_PER_MIB,
        };
        let message = err.to_string();
        assert!(message.contains("8.00 MB"));
        assert!(message.contains("max_size_mib"));
    }
}
