use std::collections::BTreeSet;

/// Selection value meaning "field is empty/absent"
pub const NONE_VALUE: &str = "__none__";

/// Multi-select filter over a categorical field.
///
/// A row passes when any of its values is selected, or when it has no
/// value and the "none" option is enabled. An empty selection is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: BTreeSet<String>,
    include_none: bool,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from selected values; `NONE_VALUE` enables the none option
    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::new();
        for value in values {
            filter.select(value);
        }
        filter
    }

    pub fn is_active(&self) -> bool {
        self.include_none || !self.selected.is_empty()
    }

    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == NONE_VALUE {
            self.include_none = true;
        } else {
            self.selected.insert(value);
        }
    }

    pub fn deselect(&mut self, value: &str) {
        if value == NONE_VALUE {
            self.include_none = false;
        } else {
            self.selected.remove(value);
        }
    }

    /// Checkbox behaviour
    pub fn toggle(&mut self, value: &str) {
        if self.is_selected(value) {
            self.deselect(value);
        } else {
            self.select(value);
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        if value == NONE_VALUE {
            self.include_none
        } else {
            self.selected.contains(value)
        }
    }

    pub fn include_none(&self) -> bool {
        self.include_none
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn matches(&self, values: &[String]) -> bool {
        if !self.is_active() {
            return true;
        }
        if values.is_empty() {
            return self.include_none;
        }
        values.iter().any(|v| self.selected.contains(v))
    }
}

/// Inclusive numeric range; rows without a value fail an active range
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn matches(&self, value: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vals(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_inactive_category_matches_everything() {
        let f = CategoryFilter::new();
        assert!(f.matches(&vals(&[])));
        assert!(f.matches(&vals(&["FOR_RENT"])));
    }

    #[test]
    fn test_multi_valued_field_matches_any() {
        let f = CategoryFilter::with_values(["FOR_SALE"]);
        assert!(f.matches(&vals(&["FOR_RENT", "FOR_SALE"])));
        assert!(!f.matches(&vals(&["FOR_RENT"])));
        assert!(!f.matches(&vals(&[])));
    }

    #[test]
    fn test_none_sentinel_toggles_absent_rows() {
        let mut f = CategoryFilter::with_values(["park-1"]);
        assert!(!f.matches(&vals(&[])));
        f.toggle(NONE_VALUE);
        assert!(f.include_none());
        assert!(f.matches(&vals(&[])));
        assert!(f.matches(&vals(&["park-1"])));
        assert!(!f.matches(&vals(&["park-2"])));
        f.toggle(NONE_VALUE);
        assert!(!f.matches(&vals(&[])));
    }

    #[test]
    fn test_none_only_selection() {
        let f = CategoryFilter::with_values([NONE_VALUE]);
        assert!(f.is_active());
        assert!(f.matches(&vals(&[])));
        assert!(!f.matches(&vals(&["park-1"])));
    }

    #[test]
    fn test_range_filter() {
        let r = RangeFilter::new(Some(2.0), Some(3.0));
        assert!(r.matches(Some(2.0)));
        assert!(r.matches(Some(3.0)));
        assert!(!r.matches(Some(4.0)));
        assert!(!r.matches(None));
        assert!(RangeFilter::default().matches(None));
        assert!(RangeFilter::new(None, Some(1000.0)).matches(Some(999.0)));
    }
}
