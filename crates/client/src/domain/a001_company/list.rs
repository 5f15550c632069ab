use contracts::domain::a001_company::Company;

use crate::shared::list::{ListItem, Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompanyField {
    Name,
    Email,
    Phone,
    Active,
}

impl Searchable for Company {
    fn search_text(&self) -> Vec<String> {
        [
            Some(self.name.as_str()),
            self.contact_email.as_deref(),
            self.contact_phone.as_deref(),
            self.address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
    }
}

impl Sortable for Company {
    type Field = CompanyField;

    fn sort_value(&self, field: CompanyField) -> SortValue {
        match field {
            CompanyField::Name => SortValue::text(Some(&self.name)),
            CompanyField::Email => SortValue::text(self.contact_email.as_deref()),
            CompanyField::Phone => SortValue::text(self.contact_phone.as_deref()),
            CompanyField::Active => SortValue::number(Some(f64::from(u8::from(self.is_active)))),
        }
    }
}

impl ListItem for Company {
    fn category_values(&self, field: CompanyField) -> Vec<String> {
        match field {
            CompanyField::Active => vec![active_label(self.is_active).to_string()],
            _ => Vec::new(),
        }
    }

    fn numeric_value(&self, _field: CompanyField) -> Option<f64> {
        None
    }
}

/// Category value used by "active" filters across list views
pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{apply, ListQuery, SearchMode};
    use contracts::domain::a001_company::CompanyId;

    fn company(name: &str, email: Option<&str>, is_active: bool) -> Company {
        Company {
            id: CompanyId::new_v4(),
            name: name.into(),
            contact_email: email.map(Into::into),
            contact_phone: None,
            address: None,
            is_active,
        }
    }

    #[test]
    fn test_search_covers_email() {
        let items = vec![
            company("Sunrise Homes", Some("ops@sunrise.com"), true),
            company("Lakeside", None, false),
        ];
        let mut query = ListQuery::new(25, SearchMode::Client);
        query.set_search("SUNRISE.COM");
        let page = apply(&items, &query);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "Sunrise Homes");
    }

    #[test]
    fn test_active_filter() {
        let items = vec![
            company("A", None, true),
            company("B", None, false),
            company("C", None, true),
        ];
        let mut query = ListQuery::new(25, SearchMode::Client);
        query.toggle_category(CompanyField::Active, active_label(false));
        let page = apply(&items, &query);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "B");
    }
}
