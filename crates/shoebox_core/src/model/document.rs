//! Document domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted to the backing file.
//! - Provide merge helpers for partial-update semantics.
//!
//! # Invariants
//! - `id` is authoritative and stable for the lifetime of a document.
//! - The extra-field map never carries an `id` entry; the struct field wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stable identifier for a stored document.
///
/// Generated ids are hyphenated v4 UUIDs, but lookup APIs accept any string
/// so callers can probe ids that never existed.
pub type DocumentId = String;

/// Arbitrary extra fields carried by a document.
///
/// Values span the full JSON range (string, number, bool, array, object,
/// null). No schema is enforced beyond the mandatory `id`.
pub type FieldMap = Map<String, Value>;

/// Canonical stored record: a mandatory `id` plus arbitrary JSON fields.
///
/// Serializes to one flat JSON object; extra fields sit next to `id` rather
/// than under a nested key, so the on-disk shape stays a plain object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable unique id, also used as the mapping key in the backing file.
    pub id: DocumentId,
    /// All fields other than `id`.
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl Document {
    /// Creates a document with a freshly generated v4 UUID id.
    pub fn new(fields: FieldMap) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Creates a document with a caller-provided id.
    ///
    /// An `id` entry inside `fields` is discarded; the explicit argument is
    /// authoritative.
    pub fn with_id(id: impl Into<DocumentId>, mut fields: FieldMap) -> Self {
        fields.remove("id");
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns a copy with `partial` shallow-merged over this document.
    ///
    /// Fields named in `partial` overwrite same-named fields; fields not
    /// mentioned are preserved. The `id` always stays the original, even
    /// when `partial` tries to supply one.
    pub fn merged(&self, partial: FieldMap) -> Self {
        let mut fields = self.fields.clone();
        for (name, value) in partial {
            if name == "id" {
                continue;
            }
            fields.insert(name, value);
        }
        Self {
            id: self.id.clone(),
            fields,
        }
    }

    /// Looks up a single extra field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
