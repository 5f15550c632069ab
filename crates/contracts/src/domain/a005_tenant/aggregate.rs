use serde::{Deserialize, Serialize};

use crate::domain::a003_lot::LotId;
use crate::domain::common::wire::{opt_f64, opt_non_empty};
use crate::domain::common::AggregateRoot;
use crate::enums::TenantStatus;

crate::define_id!(
    /// Tenant id
    TenantId
);

/// Short lot reference embedded in tenant and showing records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotSummary {
    pub id: LotId,
    pub name_or_number: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub park_name: Option<String>,
}

/// Tenant and their lot assignment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub phone: Option<String>,
    #[serde(default)]
    pub lot_id: Option<LotId>,
    #[serde(default)]
    pub lot: Option<LotSummary>,
    #[serde(default)]
    pub status: TenantStatus,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub lease_start: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub lease_end: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub monthly_rent: Option<f64>,
}

impl Tenant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn effective_lot_id(&self) -> Option<LotId> {
        self.lot_id.or_else(|| self.lot.as_ref().map(|l| l.id))
    }
}

impl AggregateRoot for Tenant {
    type Id = TenantId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "tenants"
    }

    fn element_name() -> &'static str {
        "Tenant"
    }

    fn list_name() -> &'static str {
        "Tenants"
    }
}

/// DTO for creating/updating a tenant assignment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_id: Option<LotId>,
    pub status: TenantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,
}

impl TenantDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("First and last name are required".into());
        }
        if let Some(email) = &self.email {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err("Email is not a valid address".into());
            }
        }
        if let (Some(start), Some(end)) = (&self.lease_start, &self.lease_end) {
            // ISO dates compare correctly as strings
            if end < start {
                return Err("Lease end must not be before lease start".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let json = serde_json::json!({
            "id": TenantId::new_v4(),
            "firstName": "Ana ",
            "lastName": "Lopez",
            "status": "PENDING"
        });
        let tenant: Tenant = serde_json::from_value(json).unwrap();
        assert_eq!(tenant.full_name(), "Ana Lopez");
        assert_eq!(tenant.status, TenantStatus::Pending);
    }

    #[test]
    fn test_lease_order() {
        let dto = TenantDto {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            lease_start: Some("2026-05-01".into()),
            lease_end: Some("2026-04-01".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
