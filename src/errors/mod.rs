use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported document '{}' (extension '{extension}')", path.display())]
    UnsupportedDocument { path: PathBuf, extension: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document '{}' is not valid UTF-8 text", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("Failed to extract text from '{}': {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request to language model failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Language model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Language model returned an empty {0}")]
    EmptyResponse(&'static str),
}

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("At least two schemas are required for comparison, found: [{}]", available.join(", "))]
    NotEnoughSchemas { available: Vec<String> },

    #[error("Report not found: {}", path.display())]
    ReportNotFound { path: PathBuf },
}
