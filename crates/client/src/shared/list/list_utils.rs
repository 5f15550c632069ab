/// Shared list helpers: search matching, typed sort values, sort toggling
use std::cmp::Ordering;

/// Value a row exposes for one sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    /// Missing text sorts as the empty string
    pub fn text(value: Option<&str>) -> Self {
        SortValue::Text(value.unwrap_or_default().to_string())
    }

    /// Missing numbers sort as zero
    pub fn number(value: Option<f64>) -> Self {
        SortValue::Number(value.unwrap_or(0.0))
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Case-insensitive comparison; ties broken by the raw text so the order is total.
///
/// This approximates a locale-aware collation: lowercased code points are
/// compared, so accented letters sort after `z` ("Écrin" > "Zephyr").
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Trait for rows supporting free-text search
pub trait Searchable {
    /// Texts searched by the free-text box
    fn search_text(&self) -> Vec<String>;

    /// Case-insensitive substring match on any searchable text
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

/// Trait for rows supporting column sorting
pub trait Sortable {
    /// Column identifier
    type Field: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug;

    fn sort_value(&self, field: Self::Field) -> SortValue;

    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering {
        self.sort_value(field).compare(&other.sort_value(field))
    }
}

/// Stable sort by a column; descending is the exact reverse for distinct values
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Field, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep rows matching the search text
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub ascending: bool,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Clicking the active column flips direction; another column starts ascending
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator<F: PartialEq>(
    current: Option<&SortState<F>>,
    field: F,
) -> &'static str {
    match current {
        Some(state) if state.field == field => {
            if state.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}
