//! JSON output formatting.

use serde_json::{Value, json};

use super::cards;
use crate::models::ComparisonResult;

/// Compact JSON view of a result: count plus one object per card.
#[must_use]
pub fn results_json(result: Option<&ComparisonResult>) -> Value {
    let Some(result) = result else {
        return json!({ "count": 0, "matches": [] });
    };

    let matches: Vec<Value> = cards(result).iter().map(|card| card.to_json()).collect();
    let mut obj = json!({
        "count": matches.len(),
        "matches": matches,
    });

    if let Some(summary) = &result.summary {
        obj["summary"] = json!(summary);
    }

    if let Some(cutoff) = result.cutoff_text() {
        obj["similarity_cutoff"] = json!(cutoff);
    }

    obj
}
