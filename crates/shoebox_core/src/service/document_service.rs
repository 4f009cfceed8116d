//! Document use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for embedding callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::document::{Document, FieldMap};
use crate::repo::document_repo::{DocumentRepository, RepoResult};

/// Use-case service wrapper for document CRUD operations.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new document from the supplied fields.
    ///
    /// # Contract
    /// - The stored document carries a generated unique `id`.
    /// - Returns the created document, id included.
    pub fn create(&mut self, fields: FieldMap) -> RepoResult<Document> {
        self.repo.create_document(fields)
    }

    /// Shallow-merges `partial` onto the document stored under `id`.
    ///
    /// An absent `id` fabricates a record from the partial fields; the
    /// stored `id` always wins over one supplied in `partial`.
    pub fn update(&mut self, id: &str, partial: FieldMap) -> RepoResult<Document> {
        self.repo.update_document(id, partial)
    }

    /// Gets one document by id; `None` when absent.
    pub fn get(&self, id: &str) -> Option<Document> {
        self.repo.get_document(id)
    }

    /// Lists all stored documents in unspecified order.
    pub fn list(&self) -> Vec<Document> {
        self.repo.list_documents()
    }

    /// Deletes the document under `id`; silent no-op when absent.
    pub fn delete(&mut self, id: &str) -> RepoResult<()> {
        self.repo.delete_document(id)
    }

    /// Removes every stored document.
    pub fn erase(&mut self) -> RepoResult<()> {
        self.repo.erase()
    }
}
