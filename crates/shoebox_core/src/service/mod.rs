//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep embedding hosts decoupled from storage details.

pub mod document_service;
