//! Files selected for upload and the request built from them.

use std::fmt;
use std::path::Path;

use crate::config::parts;
use crate::error::{FormError, FormResult};

/// Which of the two form inputs a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    /// First PDF, the text being checked.
    First,
    /// Second PDF, the comparison base.
    Second,
}

impl FileSlot {
    /// Both slots in form order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Multipart part name for this slot.
    #[must_use]
    pub const fn part_name(self) -> &'static str {
        match self {
            Self::First => parts::FILE1,
            Self::Second => parts::FILE2,
        }
    }

    /// Form label for this slot.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "Arquivo 1",
            Self::Second => "Arquivo 2",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-chosen file: its display name and raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap bytes already in memory.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    /// Read a PDF from disk.
    ///
    /// Only `.pdf` files (any case) are accepted, mirroring the file picker's
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns `NotPdf` for other extensions and `Io` if the file can't be read.
    pub async fn open(path: impl AsRef<Path>) -> FormResult<Self> {
        let path = path.as_ref();

        if !has_pdf_extension(path) {
            return Err(FormError::not_pdf(path));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| FormError::Io { path: path.to_path_buf(), source })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(file = %name, size = bytes.len(), "Selected file");
        Ok(Self { name, bytes })
    }

    /// File name sent in the multipart part.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile").field("name", &self.name).field("len", &self.len()).finish()
    }
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// The two files of one submission, borrowed from the form.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRequest<'a> {
    /// Sent as part `file1`.
    pub file1: &'a SelectedFile,
    /// Sent as part `file2`.
    pub file2: &'a SelectedFile,
}

impl<'a> ComparisonRequest<'a> {
    /// Pair two files into a request.
    #[must_use]
    pub const fn new(file1: &'a SelectedFile, file2: &'a SelectedFile) -> Self {
        Self { file1, file2 }
    }

    /// Parts in wire order: `(part name, file)`.
    #[must_use]
    pub fn parts(&self) -> [(&'static str, &'a SelectedFile); 2] {
        [
            (FileSlot::First.part_name(), self.file1),
            (FileSlot::Second.part_name(), self.file2),
        ]
    }
}
