//! Filter pipeline - stable filtering of a record list

use wayfarer_core::Record;

use crate::KeywordMatcher;

impl KeywordMatcher {
    /// Keep the records matching `query`, in their original order.
    /// No match is an empty result, not an error.
    pub fn filter_all<'a>(&self, records: &'a [Record], query: &str) -> Vec<&'a Record> {
        let matched: Vec<&Record> = records
            .iter()
            .filter(|record| self.matches(record, query))
            .collect();

        tracing::debug!(
            query = %query,
            total = records.len(),
            matched = matched.len(),
            "filtered recommendations"
        );
        matched
    }
}

/// Filter `records` with the built-in vocabulary
pub fn filter_all<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    KeywordMatcher::default().filter_all(records, query)
}
