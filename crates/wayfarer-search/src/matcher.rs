//! Keyword matcher
//!
//! A record matches a query when any variation of the query occurs in the
//! record's name, country, category, or description (case-insensitive):
//! 1. Direct pass: the query's synonym group, or the query alone if it is
//!    not a known term.
//! 2. Fallback pass: every group whose canonical key occurs inside the
//!    query, so "quiet beach town" still reaches the beach vocabulary.

use wayfarer_core::Record;

use crate::SynonymTable;

/// Pure predicate over records, parameterized by a synonym table
#[derive(Clone, Debug)]
pub struct KeywordMatcher {
    table: SynonymTable,
}

impl KeywordMatcher {
    pub fn new(table: SynonymTable) -> Self {
        KeywordMatcher { table }
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Does `record` match `query`?
    ///
    /// Both sides are case-folded with [`fold_case`]. The query must be
    /// non-blank; blank input is rejected earlier by
    /// [`crate::SearchQuery::parse`].
    pub fn matches(&self, record: &Record, query: &str) -> bool {
        let query = fold_case(query);
        let fields = record.searchable_fields().map(fold_case);
        let hit = |term: &str| fields.iter().any(|field| field.contains(term));

        let direct = match self.table.lookup(&query) {
            Some(group) => group.terms().iter().any(|term| hit(term.as_str())),
            None => hit(query.as_str()),
        };
        if direct {
            return true;
        }

        let fallback = self
            .table
            .keyed_within(&query)
            .any(|group| group.terms().iter().any(|term| hit(term.as_str())));
        fallback
    }
}

/// Upper-case then lower-case, so `ß`, `SS` and `ss` fold to the same text
pub fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(SynonymTable::builtin())
    }
}
