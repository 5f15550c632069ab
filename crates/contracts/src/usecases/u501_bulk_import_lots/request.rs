use serde::{Deserialize, Serialize};

use crate::domain::a002_park::ParkId;
use crate::enums::LotStatusSet;
use crate::shared::pricing::PriceFields;

/// One lot to create, already transformed from a spreadsheet row
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkLotRow {
    /// 1-based data row number in the source file (header excluded)
    pub row: usize,
    pub name_or_number: String,
    /// Park is resolved by name server-side; absent means an unassigned lot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_id: Option<ParkId>,
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
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
}

impl BulkLotRow {
    /// Pricing inputs for the preview's display price
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
}

/// Body of `POST /api/admin/lots/bulk`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BulkImportRequest {
    pub lots: Vec<BulkLotRow>,
}

impl BulkImportRequest {
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }
}
