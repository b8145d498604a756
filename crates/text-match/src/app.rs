//! Root composer: owns the form, the single result slot and the last notice.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::client::Comparator;
use crate::error::{FormError, FormResult};
use crate::formatters;
use crate::form::UploadForm;
use crate::models::{ComparisonResult, FileSlot, OutputFormat, ParagraphMatch, SelectedFile};

/// Coarse application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the user; may or may not hold a result.
    Idle,
    /// A comparison is in flight.
    Submitting,
}

/// User-visible notification produced by a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Recoverable input problem; nothing was sent.
    Warning(String),
    /// The request failed.
    Error(String),
}

impl Notice {
    /// Notice for a form error. Duplicate submissions are silent: the control
    /// is disabled, so there is nothing to tell the user.
    #[must_use]
    pub fn for_error(err: &FormError) -> Option<Self> {
        match err {
            FormError::AlreadySubmitting => None,
            e if e.is_validation() => Some(Self::Warning(e.to_user_message())),
            e => Some(Self::Error(e.to_user_message())),
        }
    }

    /// Notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Warning(m) | Self::Error(m) => m,
        }
    }

    /// Whether this reports a failed request.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The application: upload form plus the most recent comparison result.
///
/// `submit` takes `&self`, so `state()` and the result slot stay readable
/// while a comparison is in flight.
#[derive(Debug, Default)]
pub struct App {
    form: UploadForm,
    result: RwLock<Option<Arc<ComparisonResult>>>,
    notice: RwLock<Option<Notice>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl App {
    /// Create an app with an empty form and no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The upload form.
    #[must_use]
    pub const fn form(&self) -> &UploadForm {
        &self.form
    }

    /// Put a file in one of the form's slots.
    pub fn select(&mut self, slot: FileSlot, file: SelectedFile) {
        self.form.select(slot, file);
    }

    /// Current state, derived from the form's submitting flag.
    #[must_use]
    pub fn state(&self) -> AppState {
        if self.form.is_submitting() { AppState::Submitting } else { AppState::Idle }
    }

    /// Most recent successful result, if any.
    #[must_use]
    pub fn result(&self) -> Option<Arc<ComparisonResult>> {
        read(&self.result).clone()
    }

    /// Notice left by the last submission, if it failed.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        read(&self.notice).clone()
    }

    /// Paragraphs to display: empty until a result arrives.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<ParagraphMatch> {
        read(&self.result).as_deref().map(|r| r.paragraphs().to_vec()).unwrap_or_default()
    }

    /// Render the current view.
    ///
    /// # Errors
    ///
    /// Returns error only if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        formatters::render_results(read(&self.result).as_deref(), format)
    }

    /// Submit the form. A successful result replaces the previous one
    /// wholesale; a failure leaves it untouched and records a notice.
    /// A duplicate attempt while a request is in flight changes nothing.
    pub async fn submit(&self, comparator: &dyn Comparator) -> FormResult<()> {
        let outcome = self
            .form
            .submit(comparator, |result| {
                tracing::debug!(result = ?result, "New comparison result");
                *write(&self.result) = Some(Arc::new(result));
            })
            .await;

        match &outcome {
            Ok(()) => *write(&self.notice) = None,
            Err(FormError::AlreadySubmitting) => {}
            Err(e) => {
                let notice = Notice::for_error(e);
                if let Some(notice) = &notice {
                    tracing::warn!(notice = %notice, "Submission failed");
                }
                *write(&self.notice) = notice;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.state(), AppState::Idle);
        assert!(app.result().is_none());
        assert!(app.paragraphs().is_empty());
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_notice_classification() {
        let warning = Notice::for_error(&FormError::missing(vec![FileSlot::Second])).unwrap();
        assert!(!warning.is_error());
        assert_eq!(warning.message(), "Selecione os dois arquivos PDF!");

        let error = Notice::for_error(&FormError::from(ClientError::server(500, "x"))).unwrap();
        assert!(error.is_error());
        assert_eq!(error.to_string(), "Erro ao comparar PDFs");

        assert!(Notice::for_error(&FormError::AlreadySubmitting).is_none());
    }
}
