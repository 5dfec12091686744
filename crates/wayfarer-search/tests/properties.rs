use proptest::prelude::*;
use proptest::test_runner::Config;

use wayfarer_core::Record;
use wayfarer_search::{KeywordMatcher, SearchQuery};

fn record_strategy() -> impl Strategy<Value = Record> {
    let text = "[A-Za-zßéü ]{0,24}";
    (text, text, text, text).prop_map(|(name, country, category, description)| Record {
        name,
        country,
        category,
        description,
        image_url: String::new(),
        price_range: String::new(),
        best_time: String::new(),
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[a-zßéü]{1,6}",
        Just("beach".to_string()),
        Just("temple".to_string()),
        Just("spa".to_string()),
        Just("cultural heritage".to_string()),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn matching_ignores_query_case(record in record_strategy(), query in query_strategy()) {
        let matcher = KeywordMatcher::default();
        prop_assert_eq!(
            matcher.matches(&record, &query),
            matcher.matches(&record, &query.to_uppercase())
        );
    }

    #[test]
    fn matching_is_deterministic(record in record_strategy(), query in query_strategy()) {
        let matcher = KeywordMatcher::default();
        prop_assert_eq!(matcher.matches(&record, &query), matcher.matches(&record, &query));
    }

    #[test]
    fn filter_is_ordered_subsequence(
        records in proptest::collection::vec(record_strategy(), 0..24),
        query in query_strategy()
    ) {
        let matcher = KeywordMatcher::default();
        let filtered = matcher.filter_all(&records, &query);

        let mut cursor = 0;
        for kept in &filtered {
            let offset = records[cursor..]
                .iter()
                .position(|r| std::ptr::eq(r, *kept));
            prop_assert!(offset.is_some());
            cursor += offset.unwrap() + 1;
        }

        let expected = records.iter().filter(|r| matcher.matches(r, &query)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn group_members_match_identically(record in record_strategy()) {
        let matcher = KeywordMatcher::default();
        let group = ["beach", "beaches", "coastal", "seaside"];
        let first = matcher.matches(&record, group[0]);
        for term in &group[1..] {
            prop_assert_eq!(matcher.matches(&record, term), first);
        }
    }

    #[test]
    fn parsed_queries_are_never_blank(raw in "\\PC{0,16}") {
        if let Some(query) = SearchQuery::parse(&raw) {
            prop_assert!(!query.as_str().trim().is_empty());
        }
    }
}
