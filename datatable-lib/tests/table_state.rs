use datatable_lib::TableState;
use datatable_lib::error::TableError;
use datatable_lib::events::TableEvent;
use datatable_lib::filter::SearchMode;
use datatable_lib::model::Record;
use datatable_lib::options::TableOptions;
use serde_json::json;

fn dataset(n: usize) -> Vec<Record> {
    (0..n).map(|i| Record::new().set("id", i as i64)).collect()
}

fn ids(rows: &[Record]) -> Vec<i64> {
    rows.iter()
        .map(|r| r.get_int("id").unwrap().unwrap())
        .collect()
}

fn users() -> Vec<Record> {
    serde_json::from_value(json!([
        { "id": 1, "firstName": "John", "lastName": "Doe", "age": 30 },
        { "id": 2, "firstName": "Jane", "lastName": "Roe", "age": 5 },
        { "id": 3, "firstName": "Bob", "lastName": "Johnson", "age": 12 }
    ]))
    .unwrap()
}

fn field(rows: &[Record], key: &str) -> Vec<String> {
    rows.iter().map(|r| r.display(key).unwrap()).collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_seven_records_three_per_page() {
    let mut table = TableState::initialize(dataset(7), ["id"], [3], 3).unwrap();

    assert_eq!(table.total_pages(), 3);
    assert_eq!(ids(table.visible_rows()), [0, 1, 2]);
    table.go_to_page(1);
    assert_eq!(ids(table.visible_rows()), [3, 4, 5]);
    table.go_to_page(2);
    assert_eq!(ids(table.visible_rows()), [6]);

    table.go_to_page(5);
    assert_eq!(table.current_page_index(), 2);
}

#[test]
fn test_total_pages_matches_ceiling_for_all_sizes() {
    for n in [0, 1, 2, 9, 10, 11, 100] {
        for size in [1, 3, 10, 25] {
            let table = TableState::initialize(dataset(n), ["id"], [size], size).unwrap();
            let expected = if n == 0 { 1 } else { n.div_ceil(size) };
            assert_eq!(table.total_pages(), expected, "n={} size={}", n, size);
        }
    }
}

#[test]
fn test_go_to_page_always_clamps() {
    let mut table = TableState::initialize(dataset(10), ["id"], [4], 4).unwrap();
    for index in [0, 1, 2, 3, 7, usize::MAX] {
        table.go_to_page(index);
        let current = table.current_page_index();
        assert!(current <= table.total_pages() - 1);
        assert_eq!(current, index.min(2));
    }
}

#[test]
fn test_empty_dataset_has_single_empty_page() {
    let mut table = TableState::initialize(Vec::new(), ["id"], [10], 10).unwrap();
    assert_eq!(table.total_pages(), 1);
    assert!(table.visible_rows().is_empty());

    table.go_to_page(3);
    let summary = table.pagination_summary();
    assert_eq!(summary.current_page_number, 1);
    assert_eq!(summary.total_pages, 1);
    assert_eq!(summary.last_page_index, 0);
}

#[test]
fn test_reload_resets_cursor_keeps_sort_and_size() {
    let mut table = TableState::initialize(dataset(30), ["id"], [10, 25], 10).unwrap();
    table.go_to_page(2);
    table.sort_by("id");
    let sort = table.sort_state().clone();

    table.reload(dataset(50));
    assert_eq!(table.current_page_index(), 0);
    assert_eq!(table.page_size(), 10);
    assert_eq!(table.total_pages(), 5);
    assert_eq!(table.sort_state(), &sort);
    assert_eq!(ids(table.visible_rows()), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_set_page_size_preserves_or_clamps_cursor() {
    let mut table = TableState::initialize(dataset(100), ["id"], [10, 25, 50], 10).unwrap();

    table.go_to_page(1);
    table.set_page_size(25).unwrap();
    assert_eq!(table.current_page_index(), 1);
    assert_eq!(ids(table.visible_rows())[0], 25);

    table.go_to_page(3);
    table.set_page_size(50).unwrap();
    assert_eq!(table.current_page_index(), 1);
    assert_eq!(table.total_pages(), 2);
}

#[test]
fn test_set_page_size_rejects_unconfigured_size() {
    let mut table = TableState::initialize(dataset(10), ["id"], [10, 25], 10).unwrap();
    let err = table.set_page_size(15).unwrap_err();
    assert!(matches!(err, TableError::PageSizeNotConfigured { size: 15, .. }));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_summary_tracks_cursor() {
    let mut table = TableState::initialize(dataset(7), ["id"], [3], 3).unwrap();
    table.go_to_page(1);
    let summary = table.pagination_summary();
    assert_eq!(summary.current_page_number, 2);
    assert_eq!(summary.prev_page_index, 0);
    assert_eq!(summary.next_page_index, 2);
    assert_eq!(summary.first_page_index, 0);
    assert_eq!(summary.last_page_index, 2);
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort_by_age_alternates_direction() {
    let mut table = TableState::initialize(users(), ["firstName", "age"], [10], 10).unwrap();

    table.sort_by("age");
    assert_eq!(field(table.visible_rows(), "age"), ["30", "12", "5"]);
    assert!(table.sort_state().ascending);

    table.sort_by("age");
    assert_eq!(field(table.visible_rows(), "age"), ["5", "12", "30"]);
    assert!(!table.sort_state().ascending);
}

#[test]
fn test_sort_by_text_column() {
    let mut table = TableState::initialize(users(), ["firstName"], [10], 10).unwrap();
    table.sort_by("lastName");
    assert_eq!(field(table.visible_rows(), "lastName"), ["Roe", "Johnson", "Doe"]);
    table.sort_by("lastName");
    assert_eq!(field(table.visible_rows(), "lastName"), ["Doe", "Johnson", "Roe"]);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_first_name_prefix() {
    let table = TableState::initialize(users(), ["firstName", "age"], [10], 10)
        .unwrap()
        .with_search_keys(["firstName"]);
    assert_eq!(field(&table.search("jo"), "firstName"), ["John"]);
}

#[test]
fn test_search_empty_query_returns_page_in_order() {
    let table = TableState::initialize(dataset(7), ["id"], [3], 3).unwrap();
    assert_eq!(table.search(""), table.visible_rows());
}

#[test]
fn test_search_is_scoped_to_current_page() {
    let mut table = TableState::initialize(dataset(20), ["id"], [10], 10).unwrap();
    assert_eq!(ids(&table.search("1")), [1]);

    table.go_to_page(1);
    assert_eq!(ids(&table.search("1")), (10..20).collect::<Vec<_>>());
    assert_eq!(table.current_page_index(), 1);
}

// ============================================================================
// Options and events
// ============================================================================

#[test]
fn test_from_options_uses_first_page_size() {
    let options = TableOptions::new(["firstName", "lastName"])
        .with_page_sizes([2, 3])
        .with_searchable_keys(["lastName"])
        .with_search_mode(SearchMode::Prefix);
    let table = TableState::from_options(users(), &options).unwrap();

    assert_eq!(table.page_size(), 2);
    assert_eq!(table.total_pages(), 2);
    assert_eq!(field(&table.search("r"), "firstName"), ["Jane"]);
}

#[test]
fn test_from_options_rejects_empty_page_sizes() {
    let options = TableOptions::new(["id"]).with_page_sizes(Vec::new());
    let err = TableState::from_options(dataset(3), &options).unwrap_err();
    assert_eq!(err, TableError::EmptyPageSizes);
}

#[test]
fn test_dispatch_full_session() {
    let options = TableOptions::new(["id"]).with_page_sizes([3, 5]);
    let mut table = TableState::from_options(dataset(7), &options).unwrap();

    let view = table.dispatch(TableEvent::PageRequested(2)).unwrap();
    assert_eq!(ids(&view.rows), [6]);

    let view = table.dispatch(TableEvent::PageSizeChanged(5)).unwrap();
    assert_eq!(view.summary.current_page_number, 2);
    assert_eq!(ids(&view.rows), [5, 6]);

    let view = table.dispatch(TableEvent::SortRequested("id".into())).unwrap();
    assert_eq!(ids(&view.rows), [6, 5]);

    let view = table.dispatch(TableEvent::SearchChanged("5".into())).unwrap();
    assert_eq!(ids(&view.rows), [5]);

    let err = table.dispatch(TableEvent::PageSizeChanged(4)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(table.query(), Some("5"));
}
