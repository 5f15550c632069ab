//! Filter/sort/paginate behaviour of the lot list over a generated catalog.

mod common;

use serde_json::json;

use client::domain::a003_lot::list::LotField;
use client::shared::list::{
    apply, filter_items, CategoryFilter, ListItem, ListQuery, RangeFilter, SearchMode, NONE_VALUE,
    PAGE_SIZE_OPTIONS,
};
use contracts::domain::a003_lot::Lot;

use common::lot;

const MAKERS: [Option<&str>; 4] = [Some("Clayton"), Some("Champion"), None, Some("Skyline")];
const STATUSES: [&str; 3] = ["FOR_RENT", "FOR_SALE", "RENT_TO_OWN"];

fn catalog() -> Vec<Lot> {
    (0..37)
        .map(|i| {
            lot(
                &format!("Lot {i:02}"),
                json!({
                    "status": [STATUSES[i % 3]],
                    "houseManufacturer": MAKERS[i % 4],
                    "bedrooms": (i % 5) as u32,
                    "priceForRent": 500 + (i * 37) % 900,
                    "priceForSale": 40_000 + i * 1_000,
                    "priceRentToOwn": 700 + i,
                    "isActive": i % 7 != 0,
                }),
            )
        })
        .collect()
}

fn names(lots: &[Lot]) -> Vec<String> {
    lots.iter().map(|l| l.name_or_number.clone()).collect()
}

fn only(field: LotField, filter: CategoryFilter) -> ListQuery<LotField> {
    let mut query = ListQuery::new(100, SearchMode::Client);
    query.set_category(field, filter);
    query
}

#[test]
fn combined_filters_are_the_intersection_of_single_filters() {
    let lots = catalog();
    let status_filters = [
        CategoryFilter::new(),
        CategoryFilter::with_values(["FOR_RENT"]),
        CategoryFilter::with_values(["FOR_SALE", "RENT_TO_OWN"]),
    ];
    let maker_filters = [
        CategoryFilter::new(),
        CategoryFilter::with_values(["Clayton"]),
        CategoryFilter::with_values([NONE_VALUE, "Skyline"]),
    ];
    let ranges = [
        RangeFilter::default(),
        RangeFilter::new(Some(2.0), None),
        RangeFilter::new(Some(1.0), Some(3.0)),
    ];

    for status in &status_filters {
        for maker in &maker_filters {
            for beds in &ranges {
                let mut combined = ListQuery::new(100, SearchMode::Client);
                combined.set_category(LotField::Status, status.clone());
                combined.set_category(LotField::Manufacturer, maker.clone());
                combined.set_range(LotField::Bedrooms, beds.clone());

                let mut by_range = ListQuery::new(100, SearchMode::Client);
                by_range.set_range(LotField::Bedrooms, beds.clone());

                let a = names(&filter_items(&lots, &only(LotField::Status, status.clone())));
                let b = names(&filter_items(&lots, &only(LotField::Manufacturer, maker.clone())));
                let c = names(&filter_items(&lots, &by_range));
                let expected: Vec<String> = a
                    .into_iter()
                    .filter(|n| b.contains(n) && c.contains(n))
                    .collect();

                assert_eq!(names(&filter_items(&lots, &combined)), expected);
            }
        }
    }
}

#[test]
fn none_sentinel_selects_lots_without_a_value() {
    let lots = catalog();
    let mut query = ListQuery::new(100, SearchMode::Client);
    query.toggle_category(LotField::Manufacturer, NONE_VALUE);

    let rows = filter_items(&lots, &query);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|l| l.house_manufacturer.is_none()));
    assert_eq!(rows.len(), lots.iter().filter(|l| l.house_manufacturer.is_none()).count());

    // toggling again removes the filter
    query.toggle_category(LotField::Manufacturer, NONE_VALUE);
    assert_eq!(filter_items(&lots, &query).len(), lots.len());
}

#[test]
fn reversing_sort_direction_reverses_distinct_keys() {
    let lots = catalog();
    for field in [LotField::Name, LotField::Price] {
        let asc = filter_items(&lots, &ListQuery::new(100, SearchMode::Client).with_sort(field, true));
        let desc =
            filter_items(&lots, &ListQuery::new(100, SearchMode::Client).with_sort(field, false));

        let mut reversed = names(&desc);
        reversed.reverse();
        assert_eq!(names(&asc), reversed, "{field:?}");
    }
}

#[test]
fn pages_partition_the_filtered_rows() {
    let lots = catalog();
    for per_page in PAGE_SIZE_OPTIONS {
        let mut query = ListQuery::new(per_page, SearchMode::Client).with_sort(LotField::Name, true);
        query.set_category(LotField::Status, CategoryFilter::with_values(["FOR_RENT", "FOR_SALE"]));

        let expected = names(&filter_items(&lots, &query));
        let total_pages = apply(&lots, &query).total_pages;
        assert_eq!(total_pages, expected.len().div_ceil(per_page).max(1));

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            query.set_page(page);
            let result = apply(&lots, &query);
            assert_eq!(result.page, page);
            assert!(result.items.len() <= per_page);
            seen.extend(names(&result.items));
        }
        assert_eq!(seen, expected);
    }
}

#[test]
fn changing_any_filter_returns_to_first_page() {
    let lots = catalog();
    let mut query: ListQuery<LotField> = ListQuery::new(10, SearchMode::Client);

    query.set_page(3);
    query.toggle_category(LotField::Status, "FOR_RENT");
    assert_eq!(query.pagination().page(), 1);

    query.set_page(2);
    query.set_range(LotField::Price, RangeFilter::new(Some(600.0), None));
    assert_eq!(query.pagination().page(), 1);

    query.set_page(2);
    query.set_search("lot 1");
    assert_eq!(query.pagination().page(), 1);

    query.set_page(2);
    query.set_per_page(25);
    assert_eq!(apply(&lots, &query).page, 1);
}

#[test]
fn server_search_mode_leaves_search_to_the_backend() {
    let lots = catalog();
    let mut query: ListQuery<LotField> = ListQuery::new(100, SearchMode::Server);
    query.set_search("Lot 03");

    assert_eq!(query.server_search(), Some("Lot 03"));
    assert_eq!(filter_items(&lots, &query).len(), lots.len());

    query.set_search_mode(SearchMode::Client);
    assert_eq!(query.server_search(), None);
    assert_eq!(names(&filter_items(&lots, &query)), vec!["Lot 03".to_string()]);
}

#[test]
fn price_range_uses_the_derived_price() {
    let lots = catalog();
    let query = {
        let mut q = ListQuery::new(100, SearchMode::Client);
        q.set_range(LotField::Price, RangeFilter::new(None, Some(1_000.0)));
        q
    };

    for lot in filter_items(&lots, &query) {
        let price = lot.numeric_value(LotField::Price).unwrap();
        assert!(price <= 1_000.0);
        assert!(!lot.status.codes().contains(&"FOR_SALE".to_string()));
    }
}
