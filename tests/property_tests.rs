//! Property-Based Tests for shelftui
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Enum string round-trips (to_string → parse)
//! - Catalog operation invariants (search, remove, statistics)
//! - Year validation boundaries

use proptest::prelude::*;
use shelftui::input::parse_year;
use shelftui::{Book, Catalog, SearchField, YEAR_MAX, YEAR_MIN};

// =============================================================================
// Strategies
// =============================================================================

fn search_field_strategy() -> impl Strategy<Value = SearchField> {
    prop_oneof![Just(SearchField::Title), Just(SearchField::Author)]
}

/// Short titles from a small alphabet so case variants collide often
fn book_strategy() -> impl Strategy<Value = Book> {
    (
        "[a-cA-C]{1,3}",
        "[a-zA-Z ]{0,8}",
        YEAR_MIN..=YEAR_MAX,
        "[a-z]{0,6}",
        any::<bool>(),
    )
        .prop_map(|(title, author, year, genre, read)| {
            Book::new(title, author, year, genre, read)
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(book_strategy(), 0..20).prop_map(Catalog::from)
}

// =============================================================================
// SearchField Property Tests
// =============================================================================

proptest! {
    /// SearchField: to_string → parse round-trip is identity
    #[test]
    fn search_field_roundtrip(field in search_field_strategy()) {
        let s = field.to_string();
        let parsed: SearchField = s.parse().expect("Should parse");
        prop_assert_eq!(field, parsed);
    }

    /// SearchField: toggling twice is identity
    #[test]
    fn search_field_toggle_involution(field in search_field_strategy()) {
        prop_assert_eq!(field.toggled().toggled(), field);
        prop_assert_ne!(field.toggled(), field);
    }
}

// =============================================================================
// Catalog Property Tests
// =============================================================================

proptest! {
    /// An empty query matches every book, in insertion order
    #[test]
    fn empty_query_matches_everything(catalog in catalog_strategy(), field in search_field_strategy()) {
        let hits: Vec<Book> = catalog.search("", field).into_iter().cloned().collect();
        prop_assert_eq!(hits.as_slice(), catalog.books());
    }

    /// Search results are a subsequence of the catalog and all contain the query
    #[test]
    fn search_results_contain_query(
        catalog in catalog_strategy(),
        query in "[a-cA-C]{1,2}",
        field in search_field_strategy(),
    ) {
        let needle = query.to_lowercase();
        let hits = catalog.search(&query, field);
        for book in &hits {
            prop_assert!(book.field(field).to_lowercase().contains(&needle));
        }
        let expected = catalog
            .iter()
            .filter(|b| b.field(field).to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    /// Removing a title drops exactly its case variants and keeps the rest in order
    #[test]
    fn remove_drops_only_case_variants(catalog in catalog_strategy(), title in "[a-cA-C]{1,3}") {
        let remaining = catalog.without_title(&title);
        prop_assert!(remaining.len() <= catalog.len());
        prop_assert!(remaining.iter().all(|b| !b.title.eq_ignore_ascii_case(&title)));

        let kept: Vec<&Book> = catalog
            .iter()
            .filter(|b| !b.title.eq_ignore_ascii_case(&title))
            .collect();
        let remaining_refs: Vec<&Book> = remaining.iter().collect();
        prop_assert_eq!(remaining_refs, kept);
    }

    /// Read percentage always lies in [0, 100]
    #[test]
    fn read_percentage_is_bounded(catalog in catalog_strategy()) {
        let stats = catalog.statistics();
        prop_assert_eq!(stats.total, catalog.len());
        prop_assert!(stats.read <= stats.total);
        let pct = stats.read_percentage();
        prop_assert!((0.0..=100.0).contains(&pct));
    }
}

// =============================================================================
// Year Validation Property Tests
// =============================================================================

proptest! {
    /// Years inside the range parse back to themselves
    #[test]
    fn year_in_range_accepted(year in YEAR_MIN..=YEAR_MAX) {
        prop_assert_eq!(parse_year(&year.to_string()).unwrap(), year);
    }

    /// Years outside the range are rejected
    #[test]
    fn year_out_of_range_rejected(year in prop_oneof![0..YEAR_MIN, (YEAR_MAX + 1)..10000]) {
        prop_assert!(parse_year(&year.to_string()).is_err());
    }
}
