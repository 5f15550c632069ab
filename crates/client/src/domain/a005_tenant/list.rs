use contracts::domain::a005_tenant::Tenant;
use contracts::domain::common::AggregateId;

use crate::shared::list::{ListItem, Searchable, SortValue, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenantField {
    Name,
    Lot,
    Status,
    LeaseEnd,
    MonthlyRent,
}

fn lot_name(tenant: &Tenant) -> Option<&str> {
    tenant.lot.as_ref().map(|l| l.name_or_number.as_str())
}

impl Searchable for Tenant {
    fn search_text(&self) -> Vec<String> {
        let mut texts = vec![self.full_name()];
        texts.extend(
            [self.email.as_deref(), self.phone.as_deref(), lot_name(self)]
                .into_iter()
                .flatten()
                .map(str::to_string),
        );
        texts
    }
}

impl Sortable for Tenant {
    type Field = TenantField;

    fn sort_value(&self, field: TenantField) -> SortValue {
        match field {
            TenantField::Name => SortValue::text(Some(&self.full_name())),
            TenantField::Lot => SortValue::text(lot_name(self)),
            TenantField::Status => SortValue::text(Some(self.status.code())),
            // ISO dates sort correctly as text
            TenantField::LeaseEnd => SortValue::text(self.lease_end.as_deref()),
            TenantField::MonthlyRent => SortValue::number(self.monthly_rent),
        }
    }
}

impl ListItem for Tenant {
    fn category_values(&self, field: TenantField) -> Vec<String> {
        match field {
            TenantField::Status => vec![self.status.code().to_string()],
            TenantField::Lot => self
                .effective_lot_id()
                .map(|id| id.as_string())
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    fn numeric_value(&self, field: TenantField) -> Option<f64> {
        match field {
            TenantField::MonthlyRent => self.monthly_rent,
            _ => None,
        }
    }
}
