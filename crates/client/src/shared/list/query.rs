use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filters::{CategoryFilter, RangeFilter};
use super::list_utils::{sort_list, Searchable, SortState, Sortable};
use super::pagination::Pagination;

/// Where free-text search is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Substring match over the loaded rows
    Client,
    /// Search text is sent with the fetch; rows arrive pre-filtered
    #[default]
    Server,
}

/// A row the list engine can filter, search, and sort
pub trait ListItem: Searchable + Sortable {
    /// Values of a categorical field; empty means absent
    fn category_values(&self, field: Self::Field) -> Vec<String>;

    /// Value of a numeric field used by range filters
    fn numeric_value(&self, field: Self::Field) -> Option<f64>;
}

/// User selections for one list view.
///
/// Every setter that narrows or widens the result set sends the view back
/// to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F: Ord> {
    categories: BTreeMap<F, CategoryFilter>,
    ranges: BTreeMap<F, RangeFilter>,
    search: String,
    search_mode: SearchMode,
    sort: Option<SortState<F>>,
    pagination: Pagination,
}

impl<F: Copy + Ord> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new(Pagination::default().per_page(), SearchMode::default())
    }
}

impl<F: Copy + Ord> ListQuery<F> {
    pub fn new(per_page: usize, search_mode: SearchMode) -> Self {
        Self {
            categories: BTreeMap::new(),
            ranges: BTreeMap::new(),
            search: String::new(),
            search_mode,
            sort: None,
            pagination: Pagination::new(per_page),
        }
    }

    pub fn with_sort(mut self, field: F, ascending: bool) -> Self {
        self.sort = Some(SortState::new(field, ascending));
        self
    }

    pub fn category(&self, field: F) -> Option<&CategoryFilter> {
        self.categories.get(&field)
    }

    pub fn range(&self, field: F) -> Option<&RangeFilter> {
        self.ranges.get(&field)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Search text to send to the server, if any
    pub fn server_search(&self) -> Option<&str> {
        let text = self.search.trim();
        (self.search_mode == SearchMode::Server && !text.is_empty()).then_some(text)
    }

    pub fn sort(&self) -> Option<&SortState<F>> {
        self.sort.as_ref()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn set_category(&mut self, field: F, filter: CategoryFilter) {
        if filter.is_active() {
            self.categories.insert(field, filter);
        } else {
            self.categories.remove(&field);
        }
        self.pagination.reset();
    }

    pub fn toggle_category(&mut self, field: F, value: &str) {
        let mut filter = self.categories.remove(&field).unwrap_or_default();
        filter.toggle(value);
        self.set_category(field, filter);
    }

    pub fn set_range(&mut self, field: F, range: RangeFilter) {
        if range.is_active() {
            self.ranges.insert(field, range);
        } else {
            self.ranges.remove(&field);
        }
        self.pagination.reset();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.pagination.reset();
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.search_mode = mode;
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.categories.clear();
        self.ranges.clear();
        self.search.clear();
        self.pagination.reset();
    }

    /// Header click: same column flips direction, new column sorts ascending
    pub fn sort_by(&mut self, field: F) {
        match self.sort.as_mut() {
            Some(state) => state.toggle(field),
            None => self.sort = Some(SortState::new(field, true)),
        }
    }

    pub fn set_sort(&mut self, field: F, ascending: bool) {
        self.sort = Some(SortState::new(field, ascending));
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.pagination.set_per_page(per_page);
    }

    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search.trim().is_empty());
        self.categories.len() + self.ranges.len() + search
    }

    /// AND of every active predicate
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: ListItem<Field = F>,
    {
        let categories_ok = self
            .categories
            .iter()
            .all(|(field, filter)| filter.matches(&item.category_values(*field)));
        let ranges_ok = self
            .ranges
            .iter()
            .all(|(field, range)| range.matches(item.numeric_value(*field)));
        let search_ok = self.search_mode == SearchMode::Server || item.matches_filter(&self.search);

        categories_ok && ranges_ok && search_ok
    }
}

/// One rendered page of a list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based inclusive index range of the rows shown, for "Showing X-Y of Z"
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.per_page + 1;
        Some((start, start + self.items.len() - 1))
    }
}

/// Filtered and sorted rows, before pagination
pub fn filter_items<T>(items: &[T], query: &ListQuery<T::Field>) -> Vec<T>
where
    T: ListItem + Clone,
{
    let mut rows: Vec<T> = items
        .iter()
        .filter(|item| query.matches(*item))
        .cloned()
        .collect();

    if let Some(sort) = query.sort() {
        sort_list(&mut rows, sort.field, sort.ascending);
    }
    rows
}

/// Filter → sort → page slice
pub fn apply<T>(items: &[T], query: &ListQuery<T::Field>) -> ListPage<T>
where
    T: ListItem + Clone,
{
    let rows = filter_items(items, query);
    let pagination = query.pagination();
    let total_items = rows.len();
    let range = pagination.range(total_items);

    ListPage {
        page: pagination.current_page(total_items),
        per_page: pagination.per_page(),
        total_items,
        total_pages: pagination.total_pages(total_items),
        page_window: pagination.page_window(total_items),
        items: rows[range].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::list_utils::SortValue;
    use crate::shared::list::NONE_VALUE;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit {
        name: String,
        kind: Option<&'static str>,
        rent: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum UnitField {
        Name,
        Kind,
        Rent,
    }

    impl Searchable for Unit {
        fn search_text(&self) -> Vec<String> {
            vec![self.name.clone()]
        }
    }

    impl Sortable for Unit {
        type Field = UnitField;

        fn sort_value(&self, field: UnitField) -> SortValue {
            match field {
                UnitField::Name => SortValue::text(Some(&self.name)),
                UnitField::Kind => SortValue::text(self.kind),
                UnitField::Rent => SortValue::number(self.rent),
            }
        }
    }

    impl ListItem for Unit {
        fn category_values(&self, field: UnitField) -> Vec<String> {
            match field {
                UnitField::Kind => self.kind.map(str::to_string).into_iter().collect(),
                _ => Vec::new(),
            }
        }

        fn numeric_value(&self, field: UnitField) -> Option<f64> {
            match field {
                UnitField::Rent => self.rent,
                _ => None,
            }
        }
    }

    fn units(n: usize) -> Vec<Unit> {
        (1..=n)
            .map(|i| Unit {
                name: format!("Unit {i:02}"),
                kind: match i % 3 {
                    0 => None,
                    1 => Some("single"),
                    _ => Some("double"),
                },
                rent: (i % 4 != 0).then_some(i as f64 * 100.0),
            })
            .collect()
    }

    #[test]
    fn test_no_filters_returns_everything_paged() {
        let query: ListQuery<UnitField> = ListQuery::new(10, SearchMode::Client);
        let page = apply(&units(23), &query);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.shown_range(), Some((1, 10)));
    }

    #[test]
    fn test_filters_intersect() {
        let mut query = ListQuery::new(100, SearchMode::Client);
        query.toggle_category(UnitField::Kind, "single");
        query.set_range(UnitField::Rent, RangeFilter::new(Some(500.0), None));
        let page = apply(&units(12), &query);
        for unit in &page.items {
            assert_eq!(unit.kind, Some("single"));
            assert!(unit.rent.unwrap_or_default() >= 500.0);
        }
        // 7 and 10 are single with rent >= 500; 4 has no rent
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn test_none_sentinel_includes_absent() {
        let mut query = ListQuery::new(100, SearchMode::Client);
        query.toggle_category(UnitField::Kind, NONE_VALUE);
        let page = apply(&units(9), &query);
        assert_eq!(page.total_items, 3);
        assert!(page.items.iter().all(|u| u.kind.is_none()));
    }

    #[test]
    fn test_client_search_and_server_search() {
        let mut query = ListQuery::new(100, SearchMode::Client);
        query.set_search("unit 0");
        assert_eq!(apply(&units(12), &query).total_items, 9);
        assert_eq!(query.server_search(), None);

        query.set_search_mode(SearchMode::Server);
        assert_eq!(apply(&units(12), &query).total_items, 12);
        assert_eq!(query.server_search(), Some("unit 0"));
    }

    #[test]
    fn test_setters_reset_page() {
        let mut query = ListQuery::new(5, SearchMode::Client);
        query.set_page(3);
        query.set_search("x");
        assert_eq!(query.pagination().page(), 1);

        query.set_page(2);
        query.toggle_category(UnitField::Kind, "double");
        assert_eq!(query.pagination().page(), 1);

        query.set_page(2);
        query.set_range(UnitField::Rent, RangeFilter::default());
        assert_eq!(query.pagination().page(), 1);
    }

    #[test]
    fn test_sort_by_toggles_direction() {
        let mut query = ListQuery::new(100, SearchMode::Client);
        query.sort_by(UnitField::Name);
        let asc = apply(&units(5), &query).items;
        query.sort_by(UnitField::Name);
        let desc = apply(&units(5), &query).items;
        let reversed: Vec<_> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }
}
