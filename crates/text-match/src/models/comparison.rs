//! Comparison response model matching the service's JSON schema.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Result of one comparison, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Matched paragraph pairs, in service order.
    #[serde(default)]
    pub plagiarized_paragraphs: Option<Vec<ParagraphMatch>>,

    /// Free-text message from the service.
    #[serde(default)]
    pub message: Option<String>,

    /// Minimum score for a pair to be reported (e.g. "80%").
    #[serde(default)]
    pub similarity_cutoff: Option<Value>,

    /// Minimum partition length considered (e.g. "32 caracteres").
    #[serde(default)]
    pub minimum_partition_length: Option<Value>,

    /// Partition counts for both documents.
    #[serde(default)]
    pub summary: Option<ComparisonSummary>,
}

impl ComparisonResult {
    /// Matched paragraphs, empty when the field is absent or null.
    #[must_use]
    pub fn paragraphs(&self) -> &[ParagraphMatch] {
        self.plagiarized_paragraphs.as_deref().unwrap_or(&[])
    }

    /// Number of matched paragraphs.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.paragraphs().len()
    }

    /// Check whether no paragraph matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs().is_empty()
    }

    /// Similarity cutoff as display text.
    #[must_use]
    pub fn cutoff_text(&self) -> Option<String> {
        self.similarity_cutoff.as_ref().and_then(display_value)
    }

    /// Minimum partition length as display text.
    #[must_use]
    pub fn minimum_length_text(&self) -> Option<String> {
        self.minimum_partition_length.as_ref().and_then(display_value)
    }
}

/// Partition statistics reported alongside the matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Partitions extracted from the first PDF.
    #[serde(default)]
    pub total_partitions_file1: Option<u64>,

    /// Partitions extracted from the second PDF.
    #[serde(default)]
    pub total_partitions_file2: Option<u64>,

    /// Number of matched pairs.
    #[serde(default)]
    pub matching_pairs_count: Option<u64>,
}

/// One pair of fragments judged similar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphMatch {
    /// Fragment from the first document.
    #[serde(default)]
    pub doc1: DocumentFragment,

    /// Fragment from the second document.
    #[serde(default)]
    pub doc2: DocumentFragment,

    /// Score exactly as sent by the service (integer or float).
    #[serde(default)]
    pub similarity_score: Option<Number>,

    /// Fragment 1 contains a citation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation1: Option<bool>,

    /// Fragment 2 contains a citation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation2: Option<bool>,

    /// Name of the scorer used by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_metric: Option<String>,
}

impl ParagraphMatch {
    /// Build a match from two fragment texts and a score.
    #[must_use]
    pub fn new(doc1: impl Into<String>, doc2: impl Into<String>, score: Number) -> Self {
        Self {
            doc1: DocumentFragment::new(doc1),
            doc2: DocumentFragment::new(doc2),
            similarity_score: Some(score),
            ..Default::default()
        }
    }

    /// Whether fragment 1 is flagged as containing a citation.
    #[must_use]
    pub fn has_citation1(&self) -> bool {
        self.citation1.unwrap_or(false)
    }

    /// Whether fragment 2 is flagged as containing a citation.
    #[must_use]
    pub fn has_citation2(&self) -> bool {
        self.citation2.unwrap_or(false)
    }

    /// Score rendered verbatim, or "-" when the service sent none.
    #[must_use]
    pub fn score_text(&self) -> String {
        self.similarity_score.as_ref().map_or_else(|| "-".to_string(), ToString::to_string)
    }
}

/// A text fragment from one of the two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFragment {
    /// Fragment text.
    #[serde(default)]
    pub content: String,

    /// Position of the fragment in its document. The service sends a number,
    /// or a placeholder string when it cannot resolve one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_index: Option<Value>,
}

impl DocumentFragment {
    /// Create a fragment with content only.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), partition_index: None }
    }

    /// Partition index as display text.
    #[must_use]
    pub fn partition_text(&self) -> Option<String> {
        self.partition_index.as_ref().and_then(display_value)
    }
}

/// Liveness message from the service root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Message text.
    #[serde(default)]
    pub message: String,
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
