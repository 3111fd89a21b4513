use folio_core::search::{score, ScoringFields};
use folio_core::{Portfolio, Project, SearchResultType};
use proptest::prelude::*;

/// Queries drawn from words that occur in the embedded content, so most of
/// them actually match something, mixed with arbitrary text.
fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "react", "c++", "python", "aws", "sql", "a", "e", "engineer", "computer",
            "EndyBot", "mpi", "node", "data", "system", "REACT NATIVE", " go ",
        ])
        .prop_map(str::to_string),
        ".{0,12}",
    ]
}

fn project(title: String, description: String, tags: Vec<String>) -> Project {
    Project {
        id: "p".into(),
        title,
        description,
        detailed_description: None,
        image: String::new(),
        tags,
        link: "/projects/p".into(),
        github: None,
        demo_url: None,
    }
}

proptest! {
    #[test]
    fn blank_queries_return_nothing(query in "[ \t\n]{0,8}", limit in proptest::option::of(0usize..20)) {
        let portfolio = Portfolio::new();
        prop_assert!(portfolio.search_all(&query, limit).is_empty());
    }

    #[test]
    fn every_result_is_relevant(query in query_strategy()) {
        let portfolio = Portfolio::new();
        for result in portfolio.search_all(&query, None) {
            prop_assert!(result.relevance > 0, "{} scored zero", result.key());
        }
    }

    #[test]
    fn results_are_sorted_descending(query in query_strategy()) {
        let portfolio = Portfolio::new();
        let results = portfolio.search_all(&query, None);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn limit_is_a_prefix_of_the_full_ranking(query in query_strategy(), limit in 1usize..30) {
        let portfolio = Portfolio::new();
        let full = portfolio.search_all(&query, None);
        let limited = portfolio.search_all(&query, Some(limit));
        prop_assert_eq!(limited.len(), limit.min(full.len()));
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    #[test]
    fn grouped_is_the_ranking_restricted_to_each_type(query in query_strategy(), limit in proptest::option::of(1usize..6)) {
        let portfolio = Portfolio::new();
        let full = portfolio.search_all(&query, None);
        let grouped = portfolio.grouped_search_results(&query, limit);

        for result_type in SearchResultType::ALL {
            let expected: Vec<_> = full
                .iter()
                .filter(|r| r.result_type == result_type)
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect();
            prop_assert_eq!(grouped.group(result_type), &expected[..]);
        }
    }

    #[test]
    fn search_is_deterministic(query in query_strategy(), limit in proptest::option::of(0usize..10)) {
        let portfolio = Portfolio::new();
        let first = serde_json::to_string(&portfolio.search_all(&query, limit)).unwrap();
        let second = serde_json::to_string(&portfolio.search_all(&query, limit)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn score_ignores_case(title in "[a-zA-Z ]{1,12}", description in "[a-zA-Z ]{0,20}", query in "[a-zA-Z]{1,4}") {
        let entity = project(title, description, vec![]);
        prop_assert_eq!(score(&entity, &query), score(&entity, &query.to_uppercase()));
        prop_assert_eq!(score(&entity, &query), score(&entity, &query.to_lowercase()));
    }

    #[test]
    fn each_matching_tag_adds_the_same_weight(tag_count in 0usize..12) {
        let tags = vec!["Rust".to_string(); tag_count];
        let entity = project("Other".into(), String::new(), tags);
        prop_assert_eq!(score(&entity, "rust"), 8 * tag_count as u32);
    }

    #[test]
    fn empty_fields_never_score(query in "[a-z]{1,6}") {
        prop_assert_eq!(folio_core::search::score_fields(&ScoringFields::default(), &query), 0);
    }
}
