use serde::{Deserialize, Serialize};

use crate::domain::a001_company::CompanyId;
use crate::domain::a002_park::{ParkId, ParkSummary};
use crate::domain::a004_special_status::{SpecialStatusId, SpecialStatusSummary};
use crate::domain::a005_tenant::TenantId;
use crate::domain::common::wire::{opt_f64, opt_non_empty, opt_u32};
use crate::domain::common::AggregateRoot;
use crate::enums::{LotStatus, LotStatusSet};
use crate::shared::pricing::PriceFields;

crate::define_id!(
    /// Lot id
    LotId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Rentable/sellable unit within a park
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: LotId,
    pub name_or_number: String,

    #[serde(default)]
    pub status: LotStatusSet,

    /// Legacy single price, predates per-status pricing
    #[serde(default, deserialize_with = "opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_for_rent: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_for_sale: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_rent_to_own: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub price_contract_for_deed: Option<f64>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub deposit_for_rent: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub deposit_for_sale: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub deposit_rent_to_own: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub deposit_contract_for_deed: Option<f64>,

    #[serde(default, deserialize_with = "opt_non_empty")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub sq_ft: Option<u32>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub house_manufacturer: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub house_model: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub available_date: Option<String>,

    #[serde(default)]
    pub park_id: Option<ParkId>,
    #[serde(default)]
    pub park: Option<ParkSummary>,

    #[serde(default)]
    pub special_status_id: Option<SpecialStatusId>,
    #[serde(default)]
    pub special_status: Option<SpecialStatusSummary>,

    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Lot {
    /// Park id from the flat field or the embedded summary
    pub fn effective_park_id(&self) -> Option<ParkId> {
        self.park_id.or_else(|| self.park.as_ref().map(|p| p.id))
    }

    pub fn park_name(&self) -> Option<&str> {
        self.park.as_ref().map(|p| p.name.as_str())
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.park.as_ref().and_then(|p| p.effective_company_id())
    }

    pub fn effective_special_status_id(&self) -> Option<SpecialStatusId> {
        self.special_status_id
            .or_else(|| self.special_status.as_ref().map(|s| s.id))
    }

    /// Price stored for the given status
    pub fn price_for(&self, status: LotStatus) -> Option<f64> {
        match status {
            LotStatus::ForRent => self.price_for_rent,
            LotStatus::ForSale => self.price_for_sale,
            LotStatus::RentToOwn => self.price_rent_to_own,
            LotStatus::ContractForDeed => self.price_contract_for_deed,
        }
    }

    /// Deposit stored for the given status
    pub fn deposit_for(&self, status: LotStatus) -> Option<f64> {
        match status {
            LotStatus::ForRent => self.deposit_for_rent,
            LotStatus::ForSale => self.deposit_for_sale,
            LotStatus::RentToOwn => self.deposit_rent_to_own,
            LotStatus::ContractForDeed => self.deposit_contract_for_deed,
        }
    }

    pub fn price_fields(&self) -> PriceFields {
        PriceFields {
            statuses: self.status.clone(),
            for_rent: self.price_for_rent,
            for_sale: self.price_for_sale,
            rent_to_own: self.price_rent_to_own,
            contract_for_deed: self.price_contract_for_deed,
            legacy: self.price,
        }
    }

    /// Numeric price used by price range filters and sorting
    pub fn effective_price(&self) -> Option<f64> {
        self.price_fields().effective_price().map(|(_, v)| v)
    }
}

impl AggregateRoot for Lot {
    type Id = LotId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.name_or_number.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "lots"
    }

    fn element_name() -> &'static str {
        "Lot"
    }

    fn list_name() -> &'static str {
        "Lots"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a lot
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotDto {
    pub name_or_number: String,
    pub status: LotStatusSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_for_rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_for_sale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_rent_to_own: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_contract_for_deed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_for_rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_for_sale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_rent_to_own: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_contract_for_deed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sq_ft: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_id: Option<ParkId>,
}

impl LotDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name_or_number.trim().is_empty() {
            return Err("Lot name or number is required".into());
        }
        let prices = [
            self.price,
            self.price_for_rent,
            self.price_for_sale,
            self.price_rent_to_own,
            self.price_contract_for_deed,
            self.deposit_for_rent,
            self.deposit_for_sale,
            self.deposit_rent_to_own,
            self.deposit_contract_for_deed,
        ];
        if prices.iter().flatten().any(|p| *p < 0.0) {
            return Err("Prices and deposits cannot be negative".into());
        }
        if let Some(bathrooms) = self.bathrooms {
            if bathrooms < 0.0 {
                return Err("Bathrooms cannot be negative".into());
            }
        }
        Ok(())
    }
}

impl From<&Lot> for LotDto {
    fn from(l: &Lot) -> Self {
        Self {
            name_or_number: l.name_or_number.clone(),
            status: l.status.clone(),
            price: l.price,
            price_for_rent: l.price_for_rent,
            price_for_sale: l.price_for_sale,
            price_rent_to_own: l.price_rent_to_own,
            price_contract_for_deed: l.price_contract_for_deed,
            deposit_for_rent: l.deposit_for_rent,
            deposit_for_sale: l.deposit_for_sale,
            deposit_rent_to_own: l.deposit_rent_to_own,
            deposit_contract_for_deed: l.deposit_contract_for_deed,
            description: l.description.clone(),
            bedrooms: l.bedrooms,
            bathrooms: l.bathrooms,
            sq_ft: l.sq_ft,
            house_manufacturer: l.house_manufacturer.clone(),
            house_model: l.house_model.clone(),
            available_date: l.available_date.clone(),
            park_id: l.effective_park_id(),
        }
    }
}

/// Body of `PUT /api/lots/:id/special-status`; `None` clears the tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetSpecialStatusRequest {
    pub special_status_id: Option<SpecialStatusId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot_json() -> serde_json::Value {
        serde_json::json!({
            "id": LotId::new_v4(),
            "nameOrNumber": "12A",
            "status": "FOR_RENT",
            "price": "",
            "priceForRent": "950",
            "bedrooms": 3,
            "bathrooms": "1.5",
            "park": { "id": ParkId::new_v4(), "name": "Oakwood" }
        })
    }

    #[test]
    fn test_lot_normalized_on_deserialize() {
        let lot: Lot = serde_json::from_value(lot_json()).unwrap();
        assert!(lot.status.contains(LotStatus::ForRent));
        assert_eq!(lot.price, None);
        assert_eq!(lot.price_for_rent, Some(950.0));
        assert_eq!(lot.bathrooms, Some(1.5));
        assert_eq!(lot.park_name(), Some("Oakwood"));
        assert!(lot.effective_park_id().is_some());
        assert!(lot.is_active);
    }

    #[test]
    fn test_effective_price() {
        let lot: Lot = serde_json::from_value(lot_json()).unwrap();
        assert_eq!(lot.effective_price(), Some(950.0));
    }

    #[test]
    fn test_dto_validation() {
        let lot: Lot = serde_json::from_value(lot_json()).unwrap();
        let mut dto = LotDto::from(&lot);
        assert!(dto.validate().is_ok());
        dto.deposit_for_rent = Some(-1.0);
        assert!(dto.validate().is_err());
        dto.deposit_for_rent = None;
        dto.name_or_number = " ".into();
        assert!(dto.validate().is_err());
    }
}
