//! Counting flavor texts for display.

use std::collections::HashMap;

use serde::Serialize;

use crate::event::FlavorEvent;
use crate::types::FlavorText;

/// How often one flavor text occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateRow {
    pub text: FlavorText,
    /// Always at least 1.
    pub count: u64,
}

/// Counts events by exact text and orders the result for display.
///
/// Rows are sorted by descending count, then by ascending text so identical
/// data always yields identical output. An empty input yields no rows.
pub fn aggregate<'a, I>(events: I) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a FlavorEvent>,
{
    let mut counts: HashMap<&FlavorText, u64> = HashMap::new();
    for event in events {
        *counts.entry(&event.text).or_default() += 1;
    }

    let mut rows: Vec<AggregateRow> = counts
        .into_iter()
        .map(|(text, count)| AggregateRow {
            text: text.clone(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));
    rows
}
