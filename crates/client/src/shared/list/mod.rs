//! Filter → sort → paginate engine shared by every admin list view.
//!
//! Entities describe their filterable/sortable fields once through
//! [`ListItem`]; a [`ListQuery`] holds the user's current selections and
//! [`apply`] produces the visible page.

pub mod filters;
pub mod list_utils;
pub mod pagination;
pub mod query;

pub use filters::{CategoryFilter, RangeFilter, NONE_VALUE};
pub use list_utils::{
    compare_text, filter_list, get_sort_indicator, sort_list, Searchable, SortState, SortValue,
    Sortable,
};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use query::{apply, filter_items, ListItem, ListPage, ListQuery, SearchMode};
