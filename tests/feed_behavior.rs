//! Behavior tests for the company feed and feed-to-board handoff.

use finboard_core::{CompanyFeed, CompanyRecord, InMemoryFeed, SelectionBoard, ValidationError};
use finboard_tests::company;

#[tokio::test]
async fn when_the_feed_resolves_the_board_starts_fully_available() {
    // Given: a feed with three companies
    let feed = InMemoryFeed::new(vec![
        company("a", "AAA", "2024-01-01"),
        company("b", "BBB", "2024-01-02"),
        company("c", "CCC", "2024-01-03"),
    ]);

    // When: the list is fetched and a board is built over it
    let companies = feed.fetch_all().await.expect("fetch should succeed");
    let board = SelectionBoard::new(companies).expect("board should build");

    // Then: everything is available and nothing is selected
    assert_eq!(board.available().len(), 3);
    assert!(board.selected().is_empty());
}

#[tokio::test]
async fn when_the_payload_repeats_an_id_the_board_is_rejected() {
    // Given: a feed that violates the unique-id invariant
    let feed = InMemoryFeed::new(vec![
        company("a", "AAA", "2024-01-01"),
        company("a", "AAB", "2024-01-02"),
    ]);

    // When/Then: board construction fails loudly instead of desyncing
    let companies = feed.fetch_all().await.expect("fetch should succeed");
    let err = SelectionBoard::new(companies).expect_err("must fail");
    assert!(matches!(err, ValidationError::DuplicateCompanyId { .. }));
}

#[test]
fn feed_payloads_decode_from_the_camel_case_wire_shape() {
    // Given: a JSON array in the feed's wire shape
    let payload = r#"[{
        "id": "c-1",
        "symbol": "INFY",
        "name": "Infosys",
        "totalShares": 4150,
        "promoterHolding": 13.1,
        "revenue": { "current": 38821, "previousQuarter": 38318, "previousYear": 37441 },
        "pat": 6506,
        "ebitda": 9400,
        "fixedAssets": 13700,
        "totalLiabilities": 32000,
        "employeeCount": 317240,
        "lastDividend": 18,
        "lastUpdated": "2024-02-15T10:00:00Z"
    }]"#;

    // When: it is decoded
    let companies: Vec<CompanyRecord> =
        serde_json::from_str(payload).expect("payload should decode");

    // Then: fields land in the domain types, stamp raw value preserved
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].symbol.as_str(), "INFY");
    assert_eq!(companies[0].revenue.previous_year, 37441.0);
    assert_eq!(companies[0].last_updated.as_str(), "2024-02-15T10:00:00Z");
}

#[test]
fn malformed_payloads_are_a_decode_error_not_an_empty_list() {
    let payload = r#"[{ "id": "c-1" }]"#;
    let result: Result<Vec<CompanyRecord>, _> = serde_json::from_str(payload);
    assert!(result.is_err());
}
