use contracts::domain::a006_showing::Showing;
use contracts::domain::common::AggregateId;

use crate::shared::list::{ListItem, Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShowingField {
    ScheduledAt,
    Client,
    Lot,
    Status,
}

fn lot_name(showing: &Showing) -> Option<&str> {
    showing.lot.as_ref().map(|l| l.name_or_number.as_str())
}

impl Searchable for Showing {
    fn search_text(&self) -> Vec<String> {
        [
            Some(self.client_name.as_str()),
            self.client_email.as_deref(),
            self.client_phone.as_deref(),
            lot_name(self),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
    }
}

impl Sortable for Showing {
    type Field = ShowingField;

    fn sort_value(&self, field: ShowingField) -> SortValue {
        match field {
            ShowingField::ScheduledAt => SortValue::number(self.numeric_value(field)),
            ShowingField::Client => SortValue::text(Some(&self.client_name)),
            ShowingField::Lot => SortValue::text(lot_name(self)),
            ShowingField::Status => SortValue::text(Some(self.status.code())),
        }
    }
}

impl ListItem for Showing {
    fn category_values(&self, field: ShowingField) -> Vec<String> {
        match field {
            ShowingField::Status => vec![self.status.code().to_string()],
            ShowingField::Lot => vec![self.lot_id.as_string()],
            _ => Vec::new(),
        }
    }

    fn numeric_value(&self, field: ShowingField) -> Option<f64> {
        match field {
            ShowingField::ScheduledAt => Some(self.scheduled_at.timestamp() as f64),
            _ => None,
        }
    }
}
