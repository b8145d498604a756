//! Markdown output formatting.

use super::{APP_SUBTITLE, APP_TITLE, NO_MATCHES, cards, summary_rows};
use crate::models::ComparisonResult;

/// Format the header and all result cards as Markdown.
#[must_use]
pub fn format_results_markdown(result: Option<&ComparisonResult>) -> String {
    let mut output = format!("# {APP_TITLE}\n\n{APP_SUBTITLE}\n");

    let Some(result) = result else {
        return output;
    };

    let rows = summary_rows(result);
    if !rows.is_empty() {
        output.push('\n');
        for (label, value) in rows {
            output.push_str(&format!("- **{label}**: {value}\n"));
        }
    }

    if result.is_empty() {
        output.push_str(&format!("\n{NO_MATCHES}\n"));
        return output;
    }

    for card in cards(result) {
        output.push_str("\n---\n\n");
        output.push_str(&card.render_markdown());
    }

    output
}
