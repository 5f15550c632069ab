//! Lot list view: filters, search and sort columns of the admin lots table.

use contracts::domain::a003_lot::Lot;
use contracts::domain::common::AggregateId;
use contracts::shared::pricing::{display_price, PriceContext};

use crate::domain::a001_company::list::active_label;
use crate::shared::list::{ListItem, Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LotField {
    Name,
    Status,
    Park,
    Company,
    Manufacturer,
    Model,
    SpecialStatus,
    Bedrooms,
    Bathrooms,
    SqFt,
    Price,
    Active,
}

impl LotField {
    /// Parse a CLI/query column name
    pub fn from_name(name: &str) -> Option<Self> {
        let field = match name.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "name" | "nameornumber" | "lot" => LotField::Name,
            "status" => LotField::Status,
            "park" => LotField::Park,
            "company" => LotField::Company,
            "manufacturer" => LotField::Manufacturer,
            "model" => LotField::Model,
            "specialstatus" => LotField::SpecialStatus,
            "bedrooms" | "beds" => LotField::Bedrooms,
            "bathrooms" | "baths" => LotField::Bathrooms,
            "sqft" => LotField::SqFt,
            "price" => LotField::Price,
            "active" => LotField::Active,
            _ => return None,
        };
        Some(field)
    }
}

fn company_name(lot: &Lot) -> Option<&str> {
    lot.park
        .as_ref()
        .and_then(|p| p.company.as_ref())
        .map(|c| c.name.as_str())
}

fn special_status_name(lot: &Lot) -> Option<&str> {
    lot.special_status.as_ref().map(|s| s.name.as_str())
}

/// Admin table price cell
pub fn table_price(lot: &Lot) -> String {
    display_price(&lot.price_fields(), PriceContext::Table)
}

impl Searchable for Lot {
    fn search_text(&self) -> Vec<String> {
        [
            Some(self.name_or_number.as_str()),
            self.park_name(),
            self.house_manufacturer.as_deref(),
            self.house_model.as_deref(),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
    }
}

impl Sortable for Lot {
    type Field = LotField;

    fn sort_value(&self, field: LotField) -> SortValue {
        match field {
            LotField::Name => SortValue::text(Some(&self.name_or_number)),
            LotField::Status => SortValue::text(Some(&self.status.codes().join(","))),
            LotField::Park => SortValue::text(self.park_name()),
            LotField::Company => SortValue::text(company_name(self)),
            LotField::Manufacturer => SortValue::text(self.house_manufacturer.as_deref()),
            LotField::Model => SortValue::text(self.house_model.as_deref()),
            LotField::SpecialStatus => SortValue::text(special_status_name(self)),
            LotField::Bedrooms
            | LotField::Bathrooms
            | LotField::SqFt
            | LotField::Price
            | LotField::Active => SortValue::number(self.numeric_value(field)),
        }
    }
}

impl ListItem for Lot {
    fn category_values(&self, field: LotField) -> Vec<String> {
        let id = |v: Option<String>| v.into_iter().collect::<Vec<_>>();
        match field {
            LotField::Status => self.status.codes(),
            LotField::Park => id(self.effective_park_id().map(|p| p.as_string())),
            LotField::Company => id(self.company_id().map(|c| c.as_string())),
            LotField::Manufacturer => id(self.house_manufacturer.clone()),
            LotField::Model => id(self.house_model.clone()),
            LotField::SpecialStatus => {
                id(self.effective_special_status_id().map(|s| s.as_string()))
            }
            LotField::Active => vec![active_label(self.is_active).to_string()],
            _ => Vec::new(),
        }
    }

    fn numeric_value(&self, field: LotField) -> Option<f64> {
        match field {
            LotField::Bedrooms => self.bedrooms.map(f64::from),
            LotField::Bathrooms => self.bathrooms,
            LotField::SqFt => self.sq_ft.map(f64::from),
            LotField::Price => self.effective_price(),
            LotField::Active => Some(f64::from(u8::from(self.is_active))),
            _ => None,
        }
    }
}
