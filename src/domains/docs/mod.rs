//! Documentation domain module.
//!
//! This module owns the one piece of content the server hands out: the
//! bundled `docs.md` file. Both the resource and the tool read it through
//! the [`DocumentSource`] trait, so each endpoint performs its own read and
//! tests can swap the file for an in-memory source.

mod error;
mod source;

pub use error::DocsError;
pub use source::{DOCS_FILE_NAME, DocumentSource, FileDocsSource};
