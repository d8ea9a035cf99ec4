use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    errors::IngestError,
    ingest::formats::{docx_text, pdf_text},
};

/// Default schema namespace of a document: its file name up to the first `.`.
pub fn namespace_for(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Reads a document whose extension is one of `extensions`.
///
/// `.docx` bodies become one line per paragraph and `.pdf` files their extracted text;
/// anything else must be UTF-8 text.
pub fn read_document(path: &Path, extensions: &[String]) -> Result<String, IngestError> {
    let ext = extension_of(path).unwrap_or_default();
    if !extensions.iter().any(|e| *e == ext) {
        return Err(IngestError::UnsupportedDocument {
            path: path.to_path_buf(),
            extension: ext,
        });
    }

    let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match ext.as_str() {
        "docx" => docx_text(path, &bytes)?,
        "pdf" => pdf_text(path, &bytes)?,
        _ => String::from_utf8(bytes).map_err(|_| IngestError::NotUtf8 {
            path: path.to_path_buf(),
        })?,
    };

    debug!(path = %path.display(), bytes = text.len(), "Read schema document");
    Ok(text)
}

/// Files in `dir` (not recursive) with a supported extension, sorted by path.
pub fn list_documents(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, IngestError> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            extension_of(path)
                .map(|ext| extensions.contains(&ext))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}
