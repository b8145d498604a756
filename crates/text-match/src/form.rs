//! Upload form: two file slots and the single in-flight submission guard.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Instrument;
use uuid::Uuid;

use crate::client::Comparator;
use crate::error::{FormError, FormResult};
use crate::models::{ComparisonRequest, ComparisonResult, FileSlot, SelectedFile};

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Enviar";

/// Submit control label while a comparison is in flight.
pub const SUBMITTING_LABEL: &str = "Comparando...";

/// Form collecting the two PDFs to compare.
///
/// `submit` takes `&self`; the `submitting` flag is what keeps a second
/// submission from going out while the first is outstanding.
#[derive(Debug, Default)]
pub struct UploadForm {
    file1: Option<SelectedFile>,
    file2: Option<SelectedFile>,
    submitting: AtomicBool,
}

impl UploadForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a file in a slot, replacing any previous selection.
    pub fn select(&mut self, slot: FileSlot, file: SelectedFile) {
        *self.slot_mut(slot) = Some(file);
    }

    /// Empty a slot.
    pub fn clear(&mut self, slot: FileSlot) {
        *self.slot_mut(slot) = None;
    }

    /// File currently in a slot.
    #[must_use]
    pub fn selected(&self, slot: FileSlot) -> Option<&SelectedFile> {
        match slot {
            FileSlot::First => self.file1.as_ref(),
            FileSlot::Second => self.file2.as_ref(),
        }
    }

    /// Whether both slots are filled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.file1.is_some() && self.file2.is_some()
    }

    /// Whether a submission is in flight (the submit control is disabled).
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Current submit control label.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Submit both files, calling `on_result` once if the comparison succeeds.
    ///
    /// Fails fast without touching the network when the control is disabled
    /// or a slot is empty. The `submitting` flag is cleared on every exit
    /// path, including when the returned future is dropped mid-flight.
    pub async fn submit<F>(&self, comparator: &dyn Comparator, on_result: F) -> FormResult<()>
    where
        F: FnOnce(ComparisonResult),
    {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let (file1, file2) = self.validate()?;
        let _guard = SubmitGuard::acquire(&self.submitting).ok_or(FormError::AlreadySubmitting)?;

        let span = tracing::info_span!("submission", id = %Uuid::new_v4());
        let outcome = comparator
            .compare(ComparisonRequest::new(file1, file2))
            .instrument(span)
            .await;

        match outcome {
            Ok(result) => {
                tracing::info!(matches = result.match_count(), "Comparison succeeded");
                on_result(result);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Comparison failed");
                Err(FormError::Transport(e))
            }
        }
    }

    fn validate(&self) -> FormResult<(&SelectedFile, &SelectedFile)> {
        match (&self.file1, &self.file2) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => {
                let missing: Vec<FileSlot> =
                    FileSlot::ALL.into_iter().filter(|slot| self.selected(*slot).is_none()).collect();
                tracing::warn!(?missing, "Submission without both files");
                Err(FormError::missing(missing))
            }
        }
    }

    fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<SelectedFile> {
        match slot {
            FileSlot::First => &mut self.file1,
            FileSlot::Second => &mut self.file2,
        }
    }
}

/// Holds the `submitting` flag for the lifetime of one request.
struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
