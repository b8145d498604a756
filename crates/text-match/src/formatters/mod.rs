//! Output formatters: result cards as text, Markdown or JSON.

mod card;
mod json;
mod markdown;
mod text;

pub use card::*;
pub use self::json::*;
pub use markdown::*;
pub use text::*;

use crate::models::{ComparisonResult, OutputFormat};

/// Application title shown in the header.
pub const APP_TITLE: &str = "Text Match";

/// Subtitle shown under the title.
pub const APP_SUBTITLE: &str = "Comparador de textos \".pdf\"";

/// Shown instead of cards when the service found nothing.
pub const NO_MATCHES: &str = "Nenhum trecho semelhante encontrado.";

/// One card per matched paragraph, in service order.
#[must_use]
pub fn cards(result: &ComparisonResult) -> Vec<ResultCard<'_>> {
    result.paragraphs().iter().enumerate().map(|(i, m)| ResultCard::from_match(i, m)).collect()
}

/// Render the header plus, when present, the result in the requested format.
///
/// # Errors
///
/// Returns error only if JSON serialization fails.
pub fn render_results(
    result: Option<&ComparisonResult>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_results_text(result)),
        OutputFormat::Markdown => Ok(format_results_markdown(result)),
        OutputFormat::Json => serde_json::to_string_pretty(&results_json(result)),
    }
}

/// Summary rows the service optionally reports: `(label, value)`.
fn summary_rows(result: &ComparisonResult) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();

    if let Some(summary) = &result.summary {
        if let Some(n) = summary.total_partitions_file1 {
            rows.push(("Partições no arquivo 1", n.to_string()));
        }
        if let Some(n) = summary.total_partitions_file2 {
            rows.push(("Partições no arquivo 2", n.to_string()));
        }
        if let Some(n) = summary.matching_pairs_count {
            rows.push(("Pares semelhantes", n.to_string()));
        }
    }

    if let Some(cutoff) = result.cutoff_text() {
        rows.push(("Limite de similaridade", cutoff));
    }

    if let Some(min_len) = result.minimum_length_text() {
        rows.push(("Tamanho mínimo de partição", min_len));
    }

    rows
}
