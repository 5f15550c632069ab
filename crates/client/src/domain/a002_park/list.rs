use contracts::domain::a002_park::Park;
use contracts::domain::common::AggregateId;

use crate::domain::a001_company::list::active_label;
use crate::shared::list::{ListItem, Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParkField {
    Name,
    City,
    State,
    Company,
    Active,
}

fn company_name(park: &Park) -> Option<&str> {
    park.company.as_ref().map(|c| c.name.as_str())
}

impl Searchable for Park {
    fn search_text(&self) -> Vec<String> {
        [
            Some(self.name.as_str()),
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip.as_deref(),
            company_name(self),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
    }
}

impl Sortable for Park {
    type Field = ParkField;

    fn sort_value(&self, field: ParkField) -> SortValue {
        match field {
            ParkField::Name => SortValue::text(Some(&self.name)),
            ParkField::City => SortValue::text(self.city.as_deref()),
            ParkField::State => SortValue::text(self.state.as_deref()),
            ParkField::Company => SortValue::text(company_name(self)),
            ParkField::Active => SortValue::number(Some(f64::from(u8::from(self.is_active)))),
        }
    }
}

impl ListItem for Park {
    fn category_values(&self, field: ParkField) -> Vec<String> {
        match field {
            ParkField::State => self.state.iter().map(|s| s.to_uppercase()).collect(),
            ParkField::Company => self
                .effective_company_id()
                .map(|id| id.as_string())
                .into_iter()
                .collect(),
            ParkField::Active => vec![active_label(self.is_active).to_string()],
            ParkField::Name | ParkField::City => Vec::new(),
        }
    }

    fn numeric_value(&self, _field: ParkField) -> Option<f64> {
        None
    }
}
