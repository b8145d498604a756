//! One result card per matched paragraph pair.

use serde_json::{Value, json};

use crate::models::ParagraphMatch;

/// Label shown above the first fragment.
pub const FRAGMENT1_LABEL: &str = "Fragmento de texto 1";

/// Label shown above the second fragment.
pub const FRAGMENT2_LABEL: &str = "Fragmento de texto 2";

/// Label shown before the score.
pub const SCORE_LABEL: &str = "Pontuação de similaridade:";

/// Annotation for a fragment flagged as containing a citation.
pub const CITATION_NOTE: &str = "Contém citação";

/// Marker shown when both fragments contain a citation.
pub const CITATION_IDENTIFIED: &str = "Citação identificada";

/// Presentational view of one match. Holds no state beyond its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard<'a> {
    /// Zero-based position in the result list.
    pub index: usize,
    /// Fragment from the first document.
    pub doc1: &'a str,
    /// Fragment from the second document.
    pub doc2: &'a str,
    /// Score, verbatim.
    pub similarity_score: String,
    /// Fragment 1 contains a citation.
    pub citation1: bool,
    /// Fragment 2 contains a citation.
    pub citation2: bool,
    /// Partition index of fragment 1, when known.
    pub partition1: Option<String>,
    /// Partition index of fragment 2, when known.
    pub partition2: Option<String>,
}

impl<'a> ResultCard<'a> {
    /// Create a card from raw fragments and a score.
    #[must_use]
    pub fn new(index: usize, doc1: &'a str, doc2: &'a str, similarity_score: impl ToString) -> Self {
        Self {
            index,
            doc1,
            doc2,
            similarity_score: similarity_score.to_string(),
            citation1: false,
            citation2: false,
            partition1: None,
            partition2: None,
        }
    }

    /// Set the citation flags.
    #[must_use]
    pub fn with_citations(mut self, citation1: bool, citation2: bool) -> Self {
        self.citation1 = citation1;
        self.citation2 = citation2;
        self
    }

    /// Create the card for the match at `index`.
    #[must_use]
    pub fn from_match(index: usize, m: &'a ParagraphMatch) -> Self {
        Self {
            partition1: m.doc1.partition_text(),
            partition2: m.doc2.partition_text(),
            ..Self::new(index, &m.doc1.content, &m.doc2.content, m.score_text())
                .with_citations(m.has_citation1(), m.has_citation2())
        }
    }

    /// Card title, 1-based: "Resultado N".
    #[must_use]
    pub fn title(&self) -> String {
        format!("Resultado {}", self.index + 1)
    }

    /// Whether both fragments carry a citation.
    #[must_use]
    pub const fn citation_identified(&self) -> bool {
        self.citation1 && self.citation2
    }

    /// Render as plain terminal text.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut output = format!("{}\n", self.title());

        for (label, partition, text, cited) in self.fragments() {
            output.push_str(&format!("  {}:\n", fragment_label(label, partition)));
            for line in text.lines() {
                output.push_str(&format!("    {line}\n"));
            }
            if cited {
                output.push_str(&format!("    [{CITATION_NOTE}]\n"));
            }
        }

        output.push_str(&format!("  {} {}\n", SCORE_LABEL, self.similarity_score));

        if self.citation_identified() {
            output.push_str(&format!("  {CITATION_IDENTIFIED}\n"));
        }

        output
    }

    /// Render as Markdown.
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut output = format!("## {}\n\n", self.title());

        for (label, partition, text, cited) in self.fragments() {
            output.push_str(&format!("**{}**\n\n", fragment_label(label, partition)));
            output.push_str(&blockquote(text));
            output.push('\n');
            if cited {
                output.push_str(&format!("_{CITATION_NOTE}_\n\n"));
            }
        }

        output.push_str(&format!("**{}** {}\n", SCORE_LABEL, self.similarity_score));

        if self.citation_identified() {
            output.push_str(&format!("\n**{CITATION_IDENTIFIED}**\n"));
        }

        output
    }

    /// Compact JSON representation. The score is re-emitted as a number when
    /// it parses as one.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let score = serde_json::from_str::<serde_json::Number>(&self.similarity_score)
            .map_or_else(|_| json!(self.similarity_score), Value::Number);

        let mut obj = json!({
            "index": self.index + 1,
            "label": self.title(),
            "doc1": self.doc1,
            "doc2": self.doc2,
            "similarity_score": score,
            "citation1": self.citation1,
            "citation2": self.citation2,
        });

        if self.citation_identified() {
            obj["citation_identified"] = json!(true);
        }

        obj
    }

    fn fragments(&self) -> [(&'static str, Option<&str>, &'a str, bool); 2] {
        [
            (FRAGMENT1_LABEL, self.partition1.as_deref(), self.doc1, self.citation1),
            (FRAGMENT2_LABEL, self.partition2.as_deref(), self.doc2, self.citation2),
        ]
    }
}

fn fragment_label(label: &str, partition: Option<&str>) -> String {
    match partition {
        Some(p) => format!("{label} (partição {p})"),
        None => label.to_string(),
    }
}

fn blockquote(text: &str) -> String {
    if text.is_empty() {
        return ">\n".to_string();
    }
    text.lines().map(|line| format!("> {line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_one_based() {
        assert_eq!(ResultCard::new(0, "a", "b", "1").title(), "Resultado 1");
        assert_eq!(ResultCard::new(9, "a", "b", "1").title(), "Resultado 10");
    }

    #[test]
    fn test_citation_marker_needs_both_flags() {
        let card = ResultCard::new(0, "a", "b", "90").with_citations(true, false);
        let text = card.render_text();
        assert_eq!(text.matches(CITATION_NOTE).count(), 1);
        assert!(!text.contains(CITATION_IDENTIFIED));

        let card = card.with_citations(true, true);
        let text = card.render_text();
        assert_eq!(text.matches(CITATION_NOTE).count(), 2);
        assert!(text.contains(CITATION_IDENTIFIED));
    }

    #[test]
    fn test_text_layout() {
        let card = ResultCard::new(0, "foo", "bar", "0.92");
        assert_eq!(
            card.render_text(),
            "Resultado 1\n  Fragmento de texto 1:\n    foo\n  Fragmento de texto 2:\n    bar\n  Pontuação de similaridade: 0.92\n"
        );
    }

    #[test]
    fn test_markdown_quotes_every_line() {
        let card = ResultCard::new(2, "line one\nline two", "x", "81");
        let md = card.render_markdown();
        assert!(md.starts_with("## Resultado 3\n\n"));
        assert!(md.contains("> line one\n> line two\n"));
        assert!(md.contains("**Pontuação de similaridade:** 81"));
    }

    #[test]
    fn test_json_keeps_numeric_score() {
        let card = ResultCard::new(0, "a", "b", "0.92");
        let value = card.to_json();
        assert_eq!(value["similarity_score"], json!(0.92));
        assert_eq!(value["label"], "Resultado 1");
        assert!(value.get("citation_identified").is_none());

        let card = ResultCard::new(0, "a", "b", "-");
        assert_eq!(card.to_json()["similarity_score"], "-");
    }
}
