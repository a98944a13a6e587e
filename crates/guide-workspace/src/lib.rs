//! # Guide Workspace
//!
//! Filesystem host for the guide engine: implements the engine's
//! [`Workspace`](guide_engine::Workspace) collaborator contract over a real
//! project directory, and loads documents with extension-based type
//! classification. Everything here is read-only with respect to the
//! project tree.

mod document;
mod error;
mod manifest;
mod scanner;

pub use document::{read_document, DocumentText};
pub use error::{Result, WorkspaceError};
pub use manifest::{read_manifest, MANIFEST_FILE};
pub use scanner::ProjectWorkspace;
