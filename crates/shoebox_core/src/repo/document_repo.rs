//! Document repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the in-memory document mapping.
//! - Mirror every mutation to the backing file through the db layer.
//!
//! # Invariants
//! - Every mapping key equals the `id` of its document.
//! - Mutators apply the in-memory change first, then persist; a rejected
//!   persist leaves memory ahead of disk until the next successful write.

use crate::db::{load_db, persist_db, DbError, BYTES_PER_MIB};
use crate::model::document::{Document, DocumentId, FieldMap};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default backing-file location, relative to the working directory.
const DEFAULT_STORE_FILE: &str = ".shoebox/store.json";

/// Default serialized-size budget in mebibytes.
const DEFAULT_MAX_SIZE_MIB: u64 = 5;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for document persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted store data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Store construction options.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backing-file path owned by the store instance that opens it.
    pub path: PathBuf,
    /// Maximum serialized size of the full mapping, in mebibytes.
    pub max_size_mib: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
            max_size_mib: DEFAULT_MAX_SIZE_MIB,
        }
    }
}

/// Repository interface for document CRUD operations.
pub trait DocumentRepository {
    fn create_document(&mut self, fields: FieldMap) -> RepoResult<Document>;
    fn update_document(&mut self, id: &str, partial: FieldMap) -> RepoResult<Document>;
    fn get_document(&self, id: &str) -> Option<Document>;
    fn list_documents(&self) -> Vec<Document>;
    fn delete_document(&mut self, id: &str) -> RepoResult<()>;
    fn erase(&mut self) -> RepoResult<()>;
}

/// Flat-file backed document repository.
///
/// Holds the whole mapping in memory and rewrites the backing file after
/// every mutation. One instance owns one path; two instances pointed at the
/// same file race with last-write-wins semantics and no detection.
#[derive(Debug)]
pub struct FileDocumentRepository {
    path: PathBuf,
    max_size_bytes: u64,
    documents: BTreeMap<DocumentId, Document>,
}

impl FileDocumentRepository {
    /// Opens the store described by `config`.
    ///
    /// Loads the backing file when present; otherwise starts empty without
    /// writing anything yet.
    ///
    /// # Errors
    /// - I/O failures other than file-not-found.
    /// - Unparseable backing-file contents.
    /// - A mapping key that disagrees with its document's `id`.
    pub fn open(config: StoreConfig) -> RepoResult<Self> {
        let documents = load_db(&config.path)?;

        for (key, document) in &documents {
            if *key != document.id {
                return Err(RepoError::InvalidData(format!(
                    "mapping key `{key}` does not match document id `{}`",
                    document.id
                )));
            }
        }

        Ok(Self {
            path: config.path,
            max_size_bytes: config.max_size_mib * BYTES_PER_MIB,
            documents,
        })
    }

    /// Returns the backing-file path owned by this instance.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configured serialized-size budget in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    fn persist(&self) -> RepoResult<()> {
        persist_db(&self.path, &self.documents, self.max_size_bytes)?;
        Ok(())
    }
}

impl DocumentRepository for FileDocumentRepository {
    fn create_document(&mut self, fields: FieldMap) -> RepoResult<Document> {
        let document = Document::new(fields);
        self.documents
            .insert(document.id.clone(), document.clone());
        self.persist()?;
        Ok(document)
    }

    fn update_document(&mut self, id: &str, partial: FieldMap) -> RepoResult<Document> {
        // Merging over an absent id fabricates a record from the partial
        // fields; callers that need strict existence must check first.
        let document = match self.documents.get(id) {
            Some(existing) => existing.merged(partial),
            None => Document::with_id(id, partial),
        };
        self.documents
            .insert(document.id.clone(), document.clone());
        self.persist()?;
        Ok(document)
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        self.documents.get(id).cloned()
    }

    fn list_documents(&self) -> Vec<Document> {
        self.documents.values().cloned().collect()
    }

    fn delete_document(&mut self, id: &str) -> RepoResult<()> {
        self.documents.remove(id);
        self.persist()
    }

    fn erase(&mut self) -> RepoResult<()> {
        self.documents.clear();
        self.persist()
    }
}
