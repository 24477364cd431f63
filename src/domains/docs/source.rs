//! Documentation sources.
//!
//! The file is read fresh on every call. Nothing is cached, so edits to
//! `docs.md` show up on the next request and a deleted file fails loudly.

use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use super::error::DocsError;

/// File name of the bundled documentation.
pub const DOCS_FILE_NAME: &str = "docs.md";

/// Something that can produce the documentation text on demand.
pub trait DocumentSource: Send + Sync {
    /// Read the complete documentation text.
    fn read(&self) -> Result<String, DocsError>;

    /// Human-readable location of the documentation, for logs.
    fn location(&self) -> String;
}

/// Documentation backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileDocsSource {
    path: PathBuf,
}

impl FileDocsSource {
    /// Create a source reading from an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a source reading `docs.md` from the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DOCS_FILE_NAME))
    }

    /// Create a source reading `docs.md` next to the running executable.
    pub fn beside_executable() -> Result<Self, DocsError> {
        let exe = std::env::current_exe().map_err(|e| DocsError::unresolved(e.to_string()))?;
        let dir = exe.parent().ok_or_else(|| {
            DocsError::unresolved(format!("executable has no parent: {}", exe.display()))
        })?;
        Ok(Self::in_dir(dir))
    }

    /// Path of the documentation file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is currently present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl DocumentSource for FileDocsSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> Result<String, DocsError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| DocsError::from_io(&self.path, e))?;
        debug!("Read {} bytes of documentation", text.len());
        Ok(text)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
