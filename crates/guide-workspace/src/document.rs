use std::fs;
use std::path::Path;

use guide_engine::DocumentKind;

use crate::error::{Result, WorkspaceError};

/// A loaded document: its text plus the detected document kind
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// Workspace-relative `/`-separated path
    pub path: String,

    /// Class detected from the file extension
    pub kind: DocumentKind,

    /// Full document text
    pub text: String,
}

impl DocumentText {
    /// The document split into owned lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.text.lines().map(str::to_string).collect()
    }
}

/// Read a document from the workspace.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary files degrade
/// to unmatchable text instead of failing the learn operation.
pub fn read_document(root: &Path, relative: &str) -> Result<DocumentText> {
    let full = root.join(relative);
    let bytes = fs::read(&full).map_err(|source| WorkspaceError::Read {
        path: full.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    log::debug!("Loaded {} ({} bytes)", relative, text.len());
    Ok(DocumentText {
        path: relative.replace('\\', "/"),
        kind: DocumentKind::from_path(relative),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_kind_from_extension() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("README.md"), "# hi\n").unwrap();

        let document = read_document(temp.path(), "README.md").unwrap();

        assert_eq!(document.kind, DocumentKind::ProseMarkup);
        assert_eq!(document.lines(), vec!["# hi"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let result = read_document(temp.path(), "gone.ts");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_utf8_degrades_instead_of_failing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blob.bin"), [0xff, 0xfe, b'h', b'i']).unwrap();

        let document = read_document(temp.path(), "blob.bin").unwrap();

        assert_eq!(document.kind, DocumentKind::Other);
        assert!(document.text.contains("hi"));
    }
}
