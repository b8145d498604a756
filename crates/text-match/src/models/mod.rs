//! Data models for the comparison service and the upload form.
//!
//! Response models use `#[serde(default)]` throughout: the client only
//! depends on `plagiarized_paragraphs`, everything else is display-only.

mod comparison;
mod enums;
mod upload;

pub use comparison::{
    ComparisonResult, ComparisonSummary, DocumentFragment, ParagraphMatch, ServiceStatus,
};
pub use enums::OutputFormat;
pub use upload::{ComparisonRequest, FileSlot, SelectedFile};
