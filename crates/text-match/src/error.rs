//! Error types for the comparison client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

use crate::models::FileSlot;

/// User-visible warning when a submission is attempted without both files.
pub const MISSING_FILES_MESSAGE: &str = "Selecione os dois arquivos PDF!";

/// User-visible notification for any failed comparison request.
pub const COMPARISON_FAILED_MESSAGE: &str = "Erro ao comparar PDFs";

/// Errors from the HTTP client layer.
///
/// Every variant is a transport failure from the user's point of view: the
/// form reports them uniformly, without status-specific handling.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Any other non-success status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }

    /// HTTP status code, if the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}

/// Errors from the upload form.
#[derive(thiserror::Error, Debug)]
pub enum FormError {
    /// One or both file slots were empty at submit time.
    #[error("Missing file selection: {}", format_slots(.missing))]
    MissingFiles {
        /// Slots without a file, in form order
        missing: Vec<FileSlot>,
    },

    /// A selected file does not carry a `.pdf` extension.
    #[error("Not a PDF file: {}", .path.display())]
    NotPdf {
        /// Offending path
        path: PathBuf,
    },

    /// A selected file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A submission is already in flight on this form.
    #[error("A comparison is already in progress")]
    AlreadySubmitting,

    /// The comparison request failed.
    #[error("Comparison failed: {0}")]
    Transport(#[from] ClientError),
}

impl FormError {
    /// Create a missing files error.
    #[must_use]
    pub fn missing(missing: Vec<FileSlot>) -> Self {
        Self::MissingFiles { missing }
    }

    /// Create a not-a-PDF error.
    #[must_use]
    pub fn not_pdf(path: impl Into<PathBuf>) -> Self {
        Self::NotPdf { path: path.into() }
    }

    /// Returns true if the error was caught locally, before any request.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFiles { .. } | Self::NotPdf { .. } | Self::Io { .. })
    }

    /// Returns true if the request was sent and failed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Convert to the message shown to the user.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::MissingFiles { .. } => MISSING_FILES_MESSAGE.to_string(),
            Self::Transport(_) => COMPARISON_FAILED_MESSAGE.to_string(),
            Self::NotPdf { path } => {
                format!("O arquivo '{}' não é um PDF.", path.display())
            }
            Self::Io { path, .. } => {
                format!("Não foi possível ler o arquivo '{}'.", path.display())
            }
            Self::AlreadySubmitting => self.to_string(),
        }
    }
}

fn format_slots(slots: &[FileSlot]) -> String {
    slots.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;
